//! Core identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a semantics node.
///
/// Identifiers are assigned by the source framework and stay stable for a
/// node's lifetime. The wire format carries them as unsigned 32-bit
/// integers, so there is no sentinel value and no sign handling anywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The conventional root identifier.
    ///
    /// Hosts that number their tree differently configure another root on
    /// the bridge instead of renumbering nodes.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a new node identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}
