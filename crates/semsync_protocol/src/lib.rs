//! # Semsync Protocol
//!
//! Wire-size accounting and batch packing for the semantics bridge.
//!
//! The remote transport rejects any message at or above a hard byte limit,
//! so every outbound payload is sized up front and split into batches that
//! stay strictly under the limit:
//!
//! - [`node_wire_size`] and [`delete_wire_size`] estimate serialized sizes
//! - [`BatchPacker`] splits ordered payload sequences under a byte budget
//!
//! This is a pure algorithms crate; it performs no I/O and owns no state
//! between calls.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod wire;

pub use batch::{BatchPacker, Packed};
pub use wire::{delete_wire_size, node_wire_size, NODE_BASE_BYTES};
