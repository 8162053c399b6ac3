//! Semantic node payloads.

use crate::geometry::{BoundingBox, Transform};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Tri-state interaction flags carried on a node.
///
/// Each flag is present only when the state applies to the node at all: a
/// plain button has no checked state, which is different from being
/// unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStates {
    /// Whether the node is checked, when it has a checked state.
    pub checked: Option<bool>,
    /// Whether the node is selected, when selection applies to it.
    pub selected: Option<bool>,
    /// Whether the node is hidden from presentation.
    pub hidden: Option<bool>,
}

/// One node of the semantics tree.
///
/// Carries everything the remote consumer needs to present the node:
/// geometry, transform, label text, interaction states, and the ordered
/// child list. Children are referenced by identifier only, with no
/// ownership implied, so removing a child's record can never dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticNode {
    /// Stable identifier for this node.
    pub id: NodeId,
    /// Bounding geometry in the consumer's coordinate space.
    pub bounds: BoundingBox,
    /// Column-major transform from parent space.
    pub transform: Transform,
    /// Human-readable label, UTF-8.
    pub label: String,
    /// Interaction states.
    pub states: NodeStates,
    /// Children in traversal order. Order is meaningful and preserved.
    pub children: Vec<NodeId>,
}

impl SemanticNode {
    /// Creates an empty node with identity transform and no children.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            bounds: BoundingBox::default(),
            transform: Transform::IDENTITY,
            label: String::new(),
            states: NodeStates::default(),
            children: Vec::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the bounding geometry.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the interaction states.
    #[must_use]
    pub fn with_states(mut self, states: NodeStates) -> Self {
        self.states = states;
        self
    }

    /// Sets the child list, in traversal order.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NodeId>) -> Self {
        self.children = children;
        self
    }

    /// Truncates the label to at most `max_chars` characters.
    ///
    /// The cut always lands on a character boundary, so a multi-byte code
    /// point is never split. Returns true if the label was shortened.
    pub fn truncate_label(&mut self, max_chars: usize) -> bool {
        match self.label.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => {
                self.label.truncate(byte_idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = SemanticNode::new(NodeId::new(3));
        assert_eq!(node.id, NodeId::new(3));
        assert!(node.label.is_empty());
        assert!(node.children.is_empty());
        assert_eq!(node.transform, Transform::IDENTITY);
        assert_eq!(node.states, NodeStates::default());
    }

    #[test]
    fn builders_compose() {
        let node = SemanticNode::new(NodeId::new(1))
            .with_label("Submit")
            .with_children(vec![NodeId::new(2), NodeId::new(3)])
            .with_states(NodeStates {
                checked: Some(true),
                ..NodeStates::default()
            });
        assert_eq!(node.label, "Submit");
        assert_eq!(node.children, vec![NodeId::new(2), NodeId::new(3)]);
        assert_eq!(node.states.checked, Some(true));
        assert_eq!(node.states.selected, None);
    }

    #[test]
    fn truncate_shortens_long_labels() {
        let mut node = SemanticNode::new(NodeId::ROOT).with_label("hello world");
        assert!(node.truncate_label(5));
        assert_eq!(node.label, "hello");
    }

    #[test]
    fn truncate_leaves_short_labels_alone() {
        let mut node = SemanticNode::new(NodeId::ROOT).with_label("hello");
        assert!(!node.truncate_label(5));
        assert_eq!(node.label, "hello");
        assert!(!node.truncate_label(100));
        assert_eq!(node.label, "hello");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        // Four code points, each two bytes in UTF-8.
        let mut node = SemanticNode::new(NodeId::ROOT).with_label("éééé");
        assert!(node.truncate_label(2));
        assert_eq!(node.label, "éé");
        assert_eq!(node.label.len(), 4);
    }

    #[test]
    fn truncate_to_zero_clears_label() {
        let mut node = SemanticNode::new(NodeId::ROOT).with_label("x");
        assert!(node.truncate_label(0));
        assert!(node.label.is_empty());
    }

    #[test]
    fn serialized_shape_is_stable() {
        let node = SemanticNode::new(NodeId::new(1))
            .with_label("ok")
            .with_children(vec![NodeId::new(2)]);
        let json: serde_json::Value = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["label"], "ok");
        assert_eq!(json["children"], serde_json::json!([2]));
        assert_eq!(json["states"]["checked"], serde_json::Value::Null);
        assert_eq!(json["transform"]["matrix"][0], 1.0);
        assert_eq!(json["bounds"]["min"]["x"], 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn truncation_respects_the_cap_on_any_input(
                label in "\\PC{0,64}",
                max_chars in 0usize..48,
            ) {
                let original_chars = label.chars().count();
                let mut node = SemanticNode::new(NodeId::ROOT).with_label(label.clone());
                let truncated = node.truncate_label(max_chars);
                prop_assert_eq!(truncated, original_chars > max_chars);
                if truncated {
                    prop_assert_eq!(node.label.chars().count(), max_chars);
                    prop_assert!(label.starts_with(&node.label));
                } else {
                    prop_assert_eq!(&node.label, &label);
                }
            }

            #[test]
            fn truncation_is_idempotent(label in "\\PC{0,64}", max_chars in 0usize..48) {
                let mut node = SemanticNode::new(NodeId::ROOT).with_label(label);
                node.truncate_label(max_chars);
                let once = node.label.clone();
                prop_assert!(!node.truncate_label(max_chars));
                prop_assert_eq!(node.label, once);
            }
        }
    }
}
