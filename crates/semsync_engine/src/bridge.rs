//! The semantics bridge state machine.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::sink::SemanticsSink;
use semsync_core::{reachable_from, NodeId, NodeStore, SemanticNode};
use semsync_protocol::{delete_wire_size, node_wire_size, BatchPacker};
use tracing::{debug, error, info};

/// Cumulative counters over a bridge's lifetime.
#[derive(Debug, Clone, Default)]
pub struct BridgeStats {
    /// Update cycles completed end to end. Empty no-op calls are excluded.
    pub updates_applied: u64,
    /// Nodes merged into the store across all updates.
    pub nodes_merged: u64,
    /// Labels truncated to the configured cap.
    pub labels_truncated: u64,
    /// Nodes pruned as unreachable.
    pub nodes_pruned: u64,
    /// Update batches delivered to the sink.
    pub update_batches_sent: u64,
    /// Delete batches delivered to the sink.
    pub delete_batches_sent: u64,
    /// Commits delivered to the sink.
    pub commits_sent: u64,
    /// Child edges skipped during traversal (cycles, duplicate parents).
    pub duplicate_edges_skipped: u64,
    /// Payloads the packer dropped because one unit alone met the budget.
    ///
    /// The merge pre-check keeps this at zero for update payloads; delete
    /// identifiers can still land here under an oversized `id_byte_size`.
    pub oversized_dropped: u64,
    /// Last error message.
    pub last_error: Option<String>,
}

/// What one [`SemanticsBridge::apply_update`] call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Nodes merged and delivered in update batches.
    pub nodes_sent: usize,
    /// Update batches delivered.
    pub update_batches: usize,
    /// Nodes pruned as unreachable.
    pub nodes_pruned: usize,
    /// Delete batches delivered.
    pub delete_batches: usize,
    /// Child edges skipped during the prune traversal.
    pub duplicate_edges: usize,
    /// Whether the closing commit was delivered. False only for empty
    /// input, which sends nothing at all.
    pub committed: bool,
}

/// Keeps a remote consumer's semantics tree synchronized with the source
/// framework's tree.
///
/// The bridge owns the node cache outright and runs single-threaded: each
/// call executes to completion with no internal locking, and the hosting
/// framework serializes invocations on its platform thread.
pub struct SemanticsBridge<S: SemanticsSink> {
    config: BridgeConfig,
    sink: S,
    store: NodeStore,
    enabled: bool,
    stats: BridgeStats,
}

impl<S: SemanticsSink> SemanticsBridge<S> {
    /// Creates a bridge that delivers through `sink`.
    ///
    /// Fails with [`BridgeError::Config`] when the budget cannot admit a
    /// maximally labeled node.
    pub fn new(config: BridgeConfig, sink: S) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sink,
            store: NodeStore::new(),
            enabled: false,
            stats: BridgeStats::default(),
        })
    }

    /// Returns true if semantics forwarding is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables semantics forwarding.
    ///
    /// Disabling clears the node cache locally and sends nothing. The
    /// platform toggles semantics for every producer at once and tears
    /// down the remote tree itself, so no delete or commit traffic is
    /// emitted for the clear.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            info!("semantics forwarding {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
        if !enabled {
            self.store.clear();
        }
    }

    /// Read-only view of the node cache.
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Number of cached nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Returns a snapshot of the cumulative counters.
    #[must_use]
    pub fn stats(&self) -> BridgeStats {
        self.stats.clone()
    }

    /// Applies one partial tree update and synchronizes the remote view.
    ///
    /// Nodes are merged into the cache with labels truncated to the
    /// configured cap, delivered in input order as byte-budgeted update
    /// batches, then every node the root no longer reaches is pruned
    /// locally and deleted remotely, and the cycle closes with exactly one
    /// commit. An empty `updates` is a complete no-op: nothing is sent,
    /// not even a commit.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::MissingRoot`] if the root exists neither in the
    ///   cache nor in `updates`; nothing is merged or sent.
    /// - [`BridgeError::OversizedNode`] if any single node cannot fit a
    ///   message. Nodes merged so far (the offender included) stay cached,
    ///   but nothing is sent.
    /// - [`BridgeError::Transport`] if the sink refuses a delivery.
    ///   Batches already delivered are not rolled back; the next
    ///   successful update reconciles the remote view.
    pub fn apply_update(&mut self, updates: Vec<SemanticNode>) -> BridgeResult<UpdateOutcome> {
        if updates.is_empty() {
            return Ok(UpdateOutcome::default());
        }

        if !self.store.contains(self.config.root_id)
            && !updates.iter().any(|node| node.id == self.config.root_id)
        {
            return Err(self.fail(BridgeError::MissingRoot {
                root: self.config.root_id,
            }));
        }

        let budget = self.config.message_byte_budget;
        let id_byte_size = self.config.id_byte_size;
        let mut outcome = UpdateOutcome::default();

        // Merge phase. Every node is truncated, cached, and sized before
        // anything goes out, so an oversized node aborts the whole call
        // with zero sink traffic; the partial merge stays in place.
        let mut outbound = Vec::with_capacity(updates.len());
        for mut node in updates {
            if node.truncate_label(self.config.max_label_len) {
                self.stats.labels_truncated += 1;
            }
            let estimated = node_wire_size(&node, id_byte_size);
            let id = node.id;
            self.store.upsert(node.clone());
            self.stats.nodes_merged += 1;
            if estimated >= budget {
                error!(
                    "{} estimated at {} bytes cannot fit the {}-byte budget, update aborted",
                    id, estimated, budget
                );
                return Err(self.fail(BridgeError::OversizedNode {
                    id,
                    estimated,
                    budget,
                }));
            }
            outbound.push(node);
        }

        let packer = BatchPacker::new(budget);

        // Update phase, in the caller's order. The merge pre-check already
        // rejected anything the packer would have to drop.
        let packed = packer.pack(outbound, |node| node_wire_size(node, id_byte_size));
        outcome.nodes_sent = packed.unit_count();
        self.stats.oversized_dropped += packed.dropped.len() as u64;
        for batch in packed.batches {
            debug!("sending update batch of {} nodes", batch.len());
            self.deliver_updates(batch)?;
            outcome.update_batches += 1;
        }

        // Prune phase. Reachability runs over the merged cache, and the
        // unreachable remainder is removed locally before the deletes are
        // delivered.
        let reachable = reachable_from(&self.store, self.config.root_id);
        outcome.duplicate_edges = reachable.duplicate_edges.len();
        self.stats.duplicate_edges_skipped += reachable.duplicate_edges.len() as u64;

        let unreachable: Vec<NodeId> = self
            .store
            .ids()
            .filter(|id| !reachable.contains(*id))
            .collect();
        for id in &unreachable {
            self.store.remove(*id);
        }
        outcome.nodes_pruned = unreachable.len();
        self.stats.nodes_pruned += unreachable.len() as u64;

        if !unreachable.is_empty() {
            let packed = packer.pack(unreachable, |_| delete_wire_size(1, id_byte_size));
            self.stats.oversized_dropped += packed.dropped.len() as u64;
            for batch in packed.batches {
                debug!("sending delete batch of {} ids", batch.len());
                self.deliver_deletes(batch)?;
                outcome.delete_batches += 1;
            }
        }

        // Exactly one commit closes the cycle.
        self.deliver_commit()?;
        outcome.committed = true;

        self.stats.updates_applied += 1;
        self.stats.last_error = None;
        Ok(outcome)
    }

    fn deliver_updates(&mut self, batch: Vec<SemanticNode>) -> BridgeResult<()> {
        match self.sink.send_update_batch(batch) {
            Ok(()) => {
                self.stats.update_batches_sent += 1;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn deliver_deletes(&mut self, batch: Vec<NodeId>) -> BridgeResult<()> {
        match self.sink.send_delete_batch(batch) {
            Ok(()) => {
                self.stats.delete_batches_sent += 1;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn deliver_commit(&mut self) -> BridgeResult<()> {
        match self.sink.send_commit() {
            Ok(()) => {
                self.stats.commits_sent += 1;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Records the error in the stats and hands it back for propagation.
    fn fail(&mut self, error: BridgeError) -> BridgeError {
        self.stats.last_error = Some(error.to_string());
        error
    }
}
