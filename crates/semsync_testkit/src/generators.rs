//! Property-based generators for semantics updates.
//!
//! Provides strategies for generating random tree updates, both
//! well-formed trees and arbitrary graphs with cycles and shared
//! children, so properties can cover the degraded paths too.

use proptest::prelude::*;
use semsync_core::{NodeId, NodeStates, SemanticNode};

/// Strategy for labels of up to `max_chars` characters, mixing one- and
/// two-byte code points so character and byte counts diverge.
pub fn label_strategy(max_chars: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[a-z0-9 éü]{{0,{max_chars}}}"))
        .expect("Invalid regex")
}

/// Strategy for node interaction states.
pub fn states_strategy() -> impl Strategy<Value = NodeStates> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(checked, selected, hidden)| NodeStates {
            checked,
            selected,
            hidden,
        })
}

/// Strategy for an update touching up to `max_nodes` nodes with arbitrary
/// edges.
///
/// Node 0 is always present so the root precondition holds, but the edge
/// structure is unconstrained: children may repeat, point backwards, or
/// form cycles. Labels stay short enough that no node can overflow the
/// default message budget.
pub fn update_strategy(max_nodes: u32) -> impl Strategy<Value = Vec<SemanticNode>> {
    (1..=max_nodes).prop_flat_map(move |n| {
        let nodes: Vec<_> = (0..n)
            .map(move |id| {
                (
                    prop::collection::vec(0..n, 0..8),
                    label_strategy(16),
                    states_strategy(),
                )
                    .prop_map(move |(children, label, states)| {
                        SemanticNode::new(NodeId::new(id))
                            .with_children(children.into_iter().map(NodeId::new).collect())
                            .with_label(label)
                            .with_states(states)
                    })
            })
            .collect();
        nodes
    })
}

/// Strategy for a strictly tree-shaped update of up to `max_nodes` nodes.
///
/// Every node except the root gets exactly one parent with a smaller id,
/// so the result is acyclic, fully connected from node 0, and free of
/// shared children.
pub fn tree_update_strategy(max_nodes: u32) -> impl Strategy<Value = Vec<SemanticNode>> {
    (1..=max_nodes).prop_flat_map(move |n| {
        prop::collection::vec(any::<prop::sample::Index>(), (n as usize) - 1).prop_map(
            move |parents| {
                let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); n as usize];
                for (i, parent_index) in parents.iter().enumerate() {
                    let child = i + 1;
                    let parent = parent_index.index(child);
                    children[parent].push(NodeId::new(child as u32));
                }
                children
                    .into_iter()
                    .enumerate()
                    .map(|(id, kids)| {
                        SemanticNode::new(NodeId::new(id as u32)).with_children(kids)
                    })
                    .collect()
            },
        )
    })
}

/// Case-count presets shared by the property suites.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Generated inputs per property.
    pub cases: u32,
    /// Shrink-iteration ceiling when a property fails.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// A small preset for in-file smoke properties.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// A large preset for overnight or pre-release runs.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Builds the proptest runner configuration for this preset.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
