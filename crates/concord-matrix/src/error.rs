//! Error types for matrix operations.

use thiserror::Error;

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised when combining or constructing matrices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Two operands of an element-wise or composition operation differ in size.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Size of the left operand
        left: usize,
        /// Size of the right operand
        right: usize,
    },

    /// A row passed to [`BoolMatrix::from_rows`](crate::BoolMatrix::from_rows)
    /// does not match the number of rows.
    #[error("row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        /// Zero-based index of the offending row
        row: usize,
        /// Required column count
        expected: usize,
        /// Column count found
        actual: usize,
    },
}
