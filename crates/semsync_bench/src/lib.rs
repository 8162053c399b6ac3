//! Shared helpers for the semantics bridge benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use semsync_core::{NodeId, NodeStore, SemanticNode};
use semsync_engine::{BridgeResult, SemanticsSink};
use semsync_testkit::branch;

/// A sink that accepts and discards everything.
///
/// Keeps transport and recording costs out of engine measurements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl SemanticsSink for DiscardSink {
    fn send_update_batch(&self, _nodes: Vec<SemanticNode>) -> BridgeResult<()> {
        Ok(())
    }

    fn send_delete_batch(&self, _ids: Vec<NodeId>) -> BridgeResult<()> {
        Ok(())
    }

    fn send_commit(&self) -> BridgeResult<()> {
        Ok(())
    }
}

/// A two-level tree: the root fans out to `groups` interior nodes, each
/// carrying `leaves` labeled leaf children.
#[must_use]
pub fn layered_tree(groups: u32, leaves: u32, label: &str) -> Vec<SemanticNode> {
    let mids: Vec<u32> = (1..=groups).collect();
    let mut nodes = vec![branch(0, &mids)];
    for &mid in &mids {
        let kids: Vec<u32> = (1..=leaves).map(|j| mid * 10_000 + j).collect();
        nodes.push(branch(mid, &kids).with_label(label));
        for kid in kids {
            nodes.push(
                SemanticNode::new(NodeId::new(kid)).with_label(label),
            );
        }
    }
    nodes
}

/// Collects an update into a node store.
#[must_use]
pub fn store_of(nodes: Vec<SemanticNode>) -> NodeStore {
    let mut store = NodeStore::new();
    for node in nodes {
        store.upsert(node);
    }
    store
}
