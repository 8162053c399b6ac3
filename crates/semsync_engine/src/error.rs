//! Error types for the semantics bridge.

use semsync_core::NodeId;
use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur while driving the bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// No update has ever established the root node.
    ///
    /// Pruning is defined relative to the root, so updates arriving before
    /// the root exists cannot be reconciled and are rejected whole.
    #[error("no update has established root {root}")]
    MissingRoot {
        /// The configured root identifier.
        root: NodeId,
    },

    /// A single node cannot fit in any message under the configured budget.
    #[error("{id} estimated at {estimated} bytes cannot fit the {budget}-byte message budget")]
    OversizedNode {
        /// The offending node.
        id: NodeId,
        /// Its estimated wire size.
        estimated: usize,
        /// The configured message budget.
        budget: usize,
    },

    /// The configuration cannot admit every legal node.
    #[error("invalid bridge configuration: {reason}")]
    Config {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// The sink reported a delivery failure.
    ///
    /// The failure is surfaced without retry and without rolling back
    /// local state; the next successful update reconciles the remote view.
    #[error("transport error: {message}")]
    Transport {
        /// Error message from the sink.
        message: String,
    },
}

impl BridgeError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
