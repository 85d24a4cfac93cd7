//! grid_partition - stride-based 2D grid partitioning
//!
//! A pure Rust library that enumerates the evenly spaced "top-left" anchor
//! cells of a fixed-size grid at a given stride, and expands any anchor
//! into the `interval x interval` block of cells it covers. Everything is
//! stateless: both operations are pure functions of their inputs and safe
//! to call from any number of threads.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Input validation errors
pub mod error;
/// Core data structures (Cell, GridShape)
pub mod models;
/// Anchor enumeration and block expansion
pub mod partition;

pub use error::GridError;
pub use models::{Cell, GridShape};
pub use partition::{Anchors, BlockCells, GridPartitioner, enumerate_anchors, expand_block};
