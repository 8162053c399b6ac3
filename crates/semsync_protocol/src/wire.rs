//! Wire-size model for outbound messages.
//!
//! Sizes are estimates of the serialized footprint, not exact encodings:
//! the fixed fields of a node contribute a constant, the label its UTF-8
//! byte length, and each child reference one identifier. Estimating high
//! is acceptable, estimating low is not, since the transport rejects
//! messages that reach its limit.

use semsync_core::SemanticNode;

/// Fixed wire footprint of one node, excluding label bytes and child ids.
///
/// Breakdown: identifier (4) + bounding box (6 floats, 24) + column-major
/// transform (16 floats, 64) + packed state word (4) + label and
/// child-list length prefixes (2 x 4).
pub const NODE_BASE_BYTES: usize = 104;

/// Estimated wire size of one node payload.
///
/// `id_byte_size` is the wire footprint of one identifier. The label is
/// counted at its current byte length, so callers truncate before sizing.
#[must_use]
pub fn node_wire_size(node: &SemanticNode, id_byte_size: usize) -> usize {
    NODE_BASE_BYTES + node.label.len() + id_byte_size * node.children.len()
}

/// Estimated wire size of a delete message carrying `count` identifiers.
#[must_use]
pub fn delete_wire_size(count: usize, id_byte_size: usize) -> usize {
    count * id_byte_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use semsync_core::{NodeId, SemanticNode};

    #[test]
    fn bare_node_costs_the_base() {
        let node = SemanticNode::new(NodeId::ROOT);
        assert_eq!(node_wire_size(&node, 4), NODE_BASE_BYTES);
    }

    #[test]
    fn label_is_counted_in_bytes() {
        let ascii = SemanticNode::new(NodeId::ROOT).with_label("abcd");
        assert_eq!(node_wire_size(&ascii, 4), NODE_BASE_BYTES + 4);

        // Two code points, four bytes.
        let wide = SemanticNode::new(NodeId::ROOT).with_label("éé");
        assert_eq!(node_wire_size(&wide, 4), NODE_BASE_BYTES + 4);
    }

    #[test]
    fn children_cost_one_id_each() {
        let node = SemanticNode::new(NodeId::ROOT)
            .with_children(vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
        assert_eq!(node_wire_size(&node, 4), NODE_BASE_BYTES + 12);
        assert_eq!(node_wire_size(&node, 8), NODE_BASE_BYTES + 24);
    }

    #[test]
    fn delete_size_is_linear_in_count() {
        assert_eq!(delete_wire_size(0, 4), 0);
        assert_eq!(delete_wire_size(1, 4), 4);
        assert_eq!(delete_wire_size(1000, 4), 4000);
    }
}
