//! Error types.

use crate::Coord;

/// Errors reported by [`Grid`](crate::Grid) construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[display("{coord} not inside {width}x{height} grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A row's length differs from the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// The input had no rows, or its first row had no cells.
    #[display("grid has no cells")]
    Empty,
}
