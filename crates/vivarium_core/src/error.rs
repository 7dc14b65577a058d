//! Error types for the engine crate.

use thiserror::Error;

/// Errors raised by grid construction and access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate access outside the grid. Always a caller bug:
    /// neighbor enumeration never produces out-of-range coordinates
    /// under either topology.
    #[error("coordinates ({row}, {col}) outside {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Pattern text with inconsistent row widths.
    #[error("pattern row {row} is {len} cells wide, expected {expected}")]
    MalformedPattern {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Pattern text or dimensions describing a zero-row or zero-column
    /// grid.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GridError>;
