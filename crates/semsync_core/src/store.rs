//! Node cache keyed by identifier.

use crate::node::SemanticNode;
use crate::types::NodeId;
use std::collections::HashMap;

/// The cache of nodes known to (or pending delivery to) the remote consumer.
///
/// The store is exclusively owned by the bridge that drives it, so there is
/// no locking here. Children are held as identifiers only, which means a
/// removal can never invalidate another record. Iteration order of
/// [`NodeStore::ids`] is unspecified.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: HashMap<NodeId, SemanticNode>,
}

impl NodeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Inserts or replaces the record for `node.id`.
    ///
    /// Returns the previous record, if any. Absence is the common case for
    /// freshly announced nodes, not an error.
    pub fn upsert(&mut self, node: SemanticNode) -> Option<SemanticNode> {
        self.nodes.insert(node.id, node)
    }

    /// Removes the record for `id`, returning it if one was present.
    pub fn remove(&mut self, id: NodeId) -> Option<SemanticNode> {
        self.nodes.remove(&id)
    }

    /// Returns the record for `id`, if present.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SemanticNode> {
        self.nodes.get(&id)
    }

    /// Returns true if a record exists for `id`.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterates the stored identifiers, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns the number of stored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
