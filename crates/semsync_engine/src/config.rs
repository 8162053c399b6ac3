//! Configuration for the semantics bridge.

use crate::error::{BridgeError, BridgeResult};
use semsync_core::NodeId;
use semsync_protocol::NODE_BASE_BYTES;

/// Configuration for a [`SemanticsBridge`](crate::SemanticsBridge).
///
/// All values are fixed for the bridge's lifetime. The defaults match the
/// reference transport: 64 KiB messages, 32 Ki-character labels, and
/// 4-byte identifiers.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Maximum label length in characters; longer labels are truncated.
    pub max_label_len: usize,
    /// Hard byte limit for one outbound message. Every message is kept
    /// strictly below this.
    pub message_byte_budget: usize,
    /// Identifier of the traversal root.
    pub root_id: NodeId,
    /// Bytes one identifier occupies in the wire-size model.
    pub id_byte_size: usize,
}

impl BridgeConfig {
    /// Creates a configuration with the reference transport limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_label_len: 32_768,
            message_byte_budget: 65_536,
            root_id: NodeId::ROOT,
            id_byte_size: std::mem::size_of::<u32>(),
        }
    }

    /// Sets the maximum label length, in characters.
    #[must_use]
    pub fn with_max_label_len(mut self, chars: usize) -> Self {
        self.max_label_len = chars;
        self
    }

    /// Sets the per-message byte budget.
    #[must_use]
    pub fn with_message_byte_budget(mut self, bytes: usize) -> Self {
        self.message_byte_budget = bytes;
        self
    }

    /// Sets the traversal root identifier.
    #[must_use]
    pub fn with_root_id(mut self, root: NodeId) -> Self {
        self.root_id = root;
        self
    }

    /// Sets the wire footprint of one identifier.
    #[must_use]
    pub fn with_id_byte_size(mut self, bytes: usize) -> Self {
        self.id_byte_size = bytes;
        self
    }

    /// Checks that the budget can admit a maximally labeled node.
    ///
    /// A childless node with a label at the cap must still fit under the
    /// budget, otherwise legal nodes exist that could never be sent.
    /// Labels are capped in characters and sized in bytes, so the check
    /// uses one byte per character, the floor for UTF-8.
    pub fn validate(&self) -> BridgeResult<()> {
        let floor = NODE_BASE_BYTES + self.max_label_len;
        if self.message_byte_budget <= floor {
            return Err(BridgeError::Config {
                reason: format!(
                    "message budget {} must exceed {} (node footprint {} plus label cap {})",
                    self.message_byte_budget, floor, NODE_BASE_BYTES, self.max_label_len
                ),
            });
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}
