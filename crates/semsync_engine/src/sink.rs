//! Outbound sink abstraction for semantics updates.

use crate::error::{BridgeError, BridgeResult};
use parking_lot::Mutex;
use semsync_core::{NodeId, SemanticNode};
use std::sync::Arc;

/// The remote consumer of semantics updates.
///
/// Implementations hand batches to the real transport. From the bridge's
/// side every call is a synchronous handoff: queueing, delivery, and
/// reconnection are the implementation's concern. A returned error is
/// surfaced to the bridge's caller as-is; the bridge never retries.
pub trait SemanticsSink {
    /// Delivers one batch of node payloads, in order.
    fn send_update_batch(&self, nodes: Vec<SemanticNode>) -> BridgeResult<()>;

    /// Delivers one batch of deleted node identifiers, in order.
    fn send_delete_batch(&self, ids: Vec<NodeId>) -> BridgeResult<()>;

    /// Marks the end of one tree revision.
    ///
    /// After the commit the remote side may treat its view as consistent.
    fn send_commit(&self) -> BridgeResult<()>;
}

/// One recorded sink invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    /// An update batch with its node payloads.
    Update(Vec<SemanticNode>),
    /// A delete batch with its identifiers.
    Delete(Vec<NodeId>),
    /// A commit marker.
    Commit,
}

/// A sink that records every call, for tests.
///
/// Handles are cheap clones sharing one log, so a test can keep a handle
/// while the bridge owns another. Failure injection makes the next sends
/// of a given kind return a transport error without recording anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    inner: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<SinkCall>,
    fail_updates: bool,
    fail_deletes: bool,
    fail_commits: bool,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded call, in delivery order.
    #[must_use]
    pub fn calls(&self) -> Vec<SinkCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of update batches delivered.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::Update(_)))
    }

    /// Number of delete batches delivered.
    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::Delete(_)))
    }

    /// Number of commits delivered.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::Commit))
    }

    /// The most recent update batch, if any.
    #[must_use]
    pub fn last_update_batch(&self) -> Option<Vec<SemanticNode>> {
        self.inner.lock().calls.iter().rev().find_map(|call| match call {
            SinkCall::Update(nodes) => Some(nodes.clone()),
            _ => None,
        })
    }

    /// The most recent delete batch, if any.
    #[must_use]
    pub fn last_delete_batch(&self) -> Option<Vec<NodeId>> {
        self.inner.lock().calls.iter().rev().find_map(|call| match call {
            SinkCall::Delete(ids) => Some(ids.clone()),
            _ => None,
        })
    }

    /// Every node payload delivered, flattened in delivery order.
    #[must_use]
    pub fn updated_nodes(&self) -> Vec<SemanticNode> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Update(nodes) => Some(nodes.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Every deleted identifier delivered, flattened in delivery order.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<NodeId> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Delete(ids) => Some(ids.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Makes subsequent update sends fail.
    pub fn fail_updates(&self, fail: bool) {
        self.inner.lock().fail_updates = fail;
    }

    /// Makes subsequent delete sends fail.
    pub fn fail_deletes(&self, fail: bool) {
        self.inner.lock().fail_deletes = fail;
    }

    /// Makes subsequent commits fail.
    pub fn fail_commits(&self, fail: bool) {
        self.inner.lock().fail_commits = fail;
    }

    /// Clears the recorded log. Failure injection is left as configured.
    pub fn clear(&self) {
        self.inner.lock().calls.clear();
    }

    fn count(&self, pred: impl Fn(&SinkCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|call| pred(call)).count()
    }
}

impl SemanticsSink for RecordingSink {
    fn send_update_batch(&self, nodes: Vec<SemanticNode>) -> BridgeResult<()> {
        let mut state = self.inner.lock();
        if state.fail_updates {
            return Err(BridgeError::transport("update batch refused"));
        }
        state.calls.push(SinkCall::Update(nodes));
        Ok(())
    }

    fn send_delete_batch(&self, ids: Vec<NodeId>) -> BridgeResult<()> {
        let mut state = self.inner.lock();
        if state.fail_deletes {
            return Err(BridgeError::transport("delete batch refused"));
        }
        state.calls.push(SinkCall::Delete(ids));
        Ok(())
    }

    fn send_commit(&self) -> BridgeResult<()> {
        let mut state = self.inner.lock();
        if state.fail_commits {
            return Err(BridgeError::transport("commit refused"));
        }
        state.calls.push(SinkCall::Commit);
        Ok(())
    }
}
