//! Tree fixtures and bridge helpers.
//!
//! Provides convenience builders for the tree shapes that matter to the
//! bridge (chains, stars, diamonds, cycles) and closure-style helpers
//! that set up a bridge over a recording sink.

use semsync_core::{NodeId, SemanticNode};
use semsync_engine::{BridgeConfig, RecordingSink, SemanticsBridge};

/// Shorthand for [`NodeId::new`].
#[must_use]
pub fn nid(id: u32) -> NodeId {
    NodeId::new(id)
}

/// A bare node with no label and no children.
#[must_use]
pub fn node(id: u32) -> SemanticNode {
    SemanticNode::new(nid(id))
}

/// A node with the given children, in order.
#[must_use]
pub fn branch(id: u32, children: &[u32]) -> SemanticNode {
    node(id).with_children(children.iter().copied().map(NodeId::new).collect())
}

/// A chain of `len` nodes: 0 -> 1 -> ... -> len-1.
#[must_use]
pub fn chain(len: u32) -> Vec<SemanticNode> {
    (0..len)
        .map(|id| {
            if id + 1 < len {
                branch(id, &[id + 1])
            } else {
                node(id)
            }
        })
        .collect()
}

/// A root with `fanout` direct leaf children, ids 1 through `fanout`.
#[must_use]
pub fn star(fanout: u32) -> Vec<SemanticNode> {
    let leaves: Vec<u32> = (1..=fanout).collect();
    let mut nodes = vec![branch(0, &leaves)];
    nodes.extend(leaves.iter().map(|&id| node(id)));
    nodes
}

/// A diamond: 0 -> {1, 2}, and both 1 and 2 -> 3.
#[must_use]
pub fn diamond() -> Vec<SemanticNode> {
    vec![branch(0, &[1, 2]), branch(1, &[3]), branch(2, &[3]), node(3)]
}

/// Two nodes pointing at each other: 0 -> 1 -> 0.
#[must_use]
pub fn mutual_cycle() -> Vec<SemanticNode> {
    vec![branch(0, &[1]), branch(1, &[0])]
}

/// A single node that lists itself as its own child.
#[must_use]
pub fn self_cycle(id: u32) -> SemanticNode {
    branch(id, &[id])
}

/// Runs `f` with a fresh default-configured bridge and a handle to its
/// recording sink.
pub fn with_bridge<F, R>(f: F) -> R
where
    F: FnOnce(&mut SemanticsBridge<RecordingSink>, &RecordingSink) -> R,
{
    with_bridge_config(BridgeConfig::new(), f)
}

/// Runs `f` with a bridge built from `config` and a handle to its
/// recording sink.
pub fn with_bridge_config<F, R>(config: BridgeConfig, f: F) -> R
where
    F: FnOnce(&mut SemanticsBridge<RecordingSink>, &RecordingSink) -> R,
{
    let sink = RecordingSink::new();
    let mut bridge =
        SemanticsBridge::new(config, sink.clone()).expect("Failed to build bridge");
    f(&mut bridge, &sink)
}
