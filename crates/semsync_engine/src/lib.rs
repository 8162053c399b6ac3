//! # Semsync Engine
//!
//! The semantics bridge keeps a remote consumer's copy of an application's
//! semantics tree synchronized with the source framework's tree.
//!
//! This crate provides:
//! - [`SemanticsBridge`], the single-owner update state machine
//! - [`SemanticsSink`], the outbound transport abstraction
//! - [`RecordingSink`], an in-memory sink for tests
//! - [`BridgeConfig`] with transport limits and the traversal root
//!
//! ## Update cycle
//!
//! Each call to [`SemanticsBridge::apply_update`] runs one cycle:
//! 1. Merge the partial update into the node cache, truncating labels once
//! 2. Send update batches, preserving the caller's order
//! 3. Prune nodes no longer reachable from the root
//! 4. Send delete batches for the pruned identifiers
//! 5. Send exactly one commit
//!
//! ## Key invariants
//!
//! - After a successful cycle, every cached node is reachable from the root
//! - Every outbound message stays strictly under the byte budget
//! - Updates and deletes for one cycle land before its single commit
//! - Cycles and multi-parent graphs degrade to diagnostics, never hangs
//! - An empty update sends nothing, not even a commit

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bridge;
mod config;
mod error;
mod sink;

pub use bridge::{BridgeStats, SemanticsBridge, UpdateOutcome};
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use sink::{RecordingSink, SemanticsSink, SinkCall};
