use thiserror::Error;

/// Errors reported when grid parameters fail validation
///
/// Both operations in this crate are total for valid inputs; the only
/// failure mode is a non-positive dimension or stride at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid dimensions must both be positive
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions {
        /// Offending column count
        cols: i32,
        /// Offending row count
        rows: i32,
    },
    /// Stride must be positive
    #[error("interval must be positive, got {interval}")]
    InvalidInterval {
        /// Offending stride value
        interval: i32,
    },
}
