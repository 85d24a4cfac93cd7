//! Core data structures
//!
//! - `Cell`: integer coordinate on the grid
//! - `GridShape`: validated grid dimensions (shape only, no cell data)

pub mod grid;
pub mod point;

pub use grid::GridShape;
pub use point::Cell;
