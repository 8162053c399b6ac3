//! Reachability analysis over the node store.

use crate::store::NodeStore;
use crate::types::NodeId;
use std::collections::{HashSet, VecDeque};
use tracing::warn;

/// A child edge skipped because its target had already been reached along
/// another path.
///
/// Skipped edges indicate a cycle or a node claimed by more than one
/// parent. Well-formed producers emit trees, but nothing in the inbound
/// contract forbids such graphs, so they degrade to diagnostics instead of
/// faulting the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEdge {
    /// The parent whose child reference was skipped.
    pub parent: NodeId,
    /// The child that had already been reached.
    pub child: NodeId,
}

/// The set of identifiers reachable from a traversal root.
#[derive(Debug, Default)]
pub struct Reachable {
    ids: HashSet<NodeId>,
    /// Edges skipped during traversal, in discovery order.
    pub duplicate_edges: Vec<DuplicateEdge>,
}

impl Reachable {
    /// Returns true if `id` was reached.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the number of reachable identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing was reachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the reachable identifiers, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }
}

/// Computes the identifiers transitively reachable from `root`.
///
/// Breadth-first over each stored node's child list. An identifier joins
/// the visited set the moment it is enqueued and is never enqueued again,
/// so the traversal visits each node at most once and terminates for
/// cyclic and multi-parent graphs alike; the offending edges are recorded
/// as [`DuplicateEdge`]s and skipped.
///
/// An identifier referenced as a child counts as reachable even when no
/// record for it is stored yet, since its record may arrive in a later
/// update. An absent root yields an empty set.
#[must_use]
pub fn reachable_from(store: &NodeStore, root: NodeId) -> Reachable {
    let mut result = Reachable::default();
    if !store.contains(root) {
        return result;
    }

    let mut queue = VecDeque::new();
    result.ids.insert(root);
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        // Reachable-but-absent ids have no children to walk.
        if let Some(node) = store.get(id) {
            for &child in &node.children {
                if result.ids.insert(child) {
                    queue.push_back(child);
                } else {
                    warn!(
                        "{} already reached along another path, skipping edge from {}",
                        child, id
                    );
                    result.duplicate_edges.push(DuplicateEdge { parent: id, child });
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SemanticNode;

    fn branch(id: u32, children: &[u32]) -> SemanticNode {
        SemanticNode::new(NodeId::new(id))
            .with_children(children.iter().copied().map(NodeId::new).collect())
    }

    fn store_of(nodes: Vec<SemanticNode>) -> NodeStore {
        let mut store = NodeStore::new();
        for node in nodes {
            store.upsert(node);
        }
        store
    }

    #[test]
    fn absent_root_reaches_nothing() {
        let store = store_of(vec![branch(1, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert!(reach.is_empty());
        assert!(!reach.contains(NodeId::new(1)));
        assert!(reach.duplicate_edges.is_empty());
    }

    #[test]
    fn lone_root_reaches_itself() {
        let store = store_of(vec![branch(0, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 1);
        assert!(reach.contains(NodeId::ROOT));
    }

    #[test]
    fn chain_is_fully_reachable() {
        let store = store_of(vec![branch(0, &[1]), branch(1, &[2]), branch(2, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 3);
        for id in 0..3 {
            assert!(reach.contains(NodeId::new(id)));
        }
        assert!(reach.duplicate_edges.is_empty());
    }

    #[test]
    fn detached_subtree_is_not_reached() {
        let store = store_of(vec![
            branch(0, &[1]),
            branch(1, &[]),
            branch(5, &[6]),
            branch(6, &[]),
        ]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 2);
        assert!(!reach.contains(NodeId::new(5)));
        assert!(!reach.contains(NodeId::new(6)));
    }

    #[test]
    fn absent_child_still_counts_as_reachable() {
        // Node 2 has no record yet; it may arrive in a later update.
        let store = store_of(vec![branch(0, &[1, 2]), branch(1, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 3);
        assert!(reach.contains(NodeId::new(2)));
    }

    #[test]
    fn self_cycle_terminates_with_diagnostic() {
        let store = store_of(vec![branch(0, &[0])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 1);
        assert_eq!(
            reach.duplicate_edges,
            vec![DuplicateEdge {
                parent: NodeId::ROOT,
                child: NodeId::ROOT,
            }]
        );
    }

    #[test]
    fn mutual_cycle_terminates() {
        let store = store_of(vec![branch(0, &[1]), branch(1, &[0])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 2);
        assert_eq!(
            reach.duplicate_edges,
            vec![DuplicateEdge {
                parent: NodeId::new(1),
                child: NodeId::ROOT,
            }]
        );
    }

    #[test]
    fn diamond_reports_second_parent() {
        // 0 -> {1, 2}, both 1 and 2 -> 3. Node 3 is reached once, and the
        // later edge into it is reported.
        let store = store_of(vec![
            branch(0, &[1, 2]),
            branch(1, &[3]),
            branch(2, &[3]),
            branch(3, &[]),
        ]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 4);
        assert_eq!(reach.duplicate_edges.len(), 1);
        assert_eq!(reach.duplicate_edges[0].child, NodeId::new(3));
    }

    #[test]
    fn repeated_child_in_one_list_is_reported() {
        let store = store_of(vec![branch(0, &[1, 1]), branch(1, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        assert_eq!(reach.len(), 2);
        assert_eq!(
            reach.duplicate_edges,
            vec![DuplicateEdge {
                parent: NodeId::ROOT,
                child: NodeId::new(1),
            }]
        );
    }

    #[test]
    fn iter_yields_every_reached_id() {
        let store = store_of(vec![branch(0, &[1, 2]), branch(1, &[]), branch(2, &[])]);
        let reach = reachable_from(&store, NodeId::ROOT);
        let mut ids: Vec<u32> = reach.iter().map(NodeId::as_u32).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
