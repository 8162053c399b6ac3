//! # Semsync Core
//!
//! Data model and graph algorithms for the semantics bridge.
//!
//! This crate defines the types a host framework hands to the bridge and
//! the structures the bridge maintains between updates:
//!
//! - [`NodeId`] and [`SemanticNode`], the inbound update payloads
//! - [`NodeStore`], the cache of nodes known to the remote consumer
//! - [`reachable_from`], cycle-safe reachability used to prune stale nodes
//!
//! Everything here is pure data and algorithms; delivery to the remote
//! consumer lives in `semsync_engine`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod geometry;
mod node;
mod reachable;
mod store;
mod types;

pub use geometry::{BoundingBox, Transform, Vec3};
pub use node::{NodeStates, SemanticNode};
pub use reachable::{reachable_from, DuplicateEdge, Reachable};
pub use store::NodeStore;
pub use types::NodeId;
