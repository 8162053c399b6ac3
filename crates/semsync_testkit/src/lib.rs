//! # Semsync Testkit
//!
//! Test utilities for the semantics bridge.
//!
//! This crate provides:
//! - Tree fixtures (chains, stars, diamonds, cycles) and bridge helpers
//! - Property-based generators for arbitrary and strictly tree-shaped
//!   updates, using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use semsync_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_bridge() {
//!     with_bridge(|bridge, sink| {
//!         bridge.apply_update(chain(3)).unwrap();
//!         assert_eq!(sink.commit_count(), 1);
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
