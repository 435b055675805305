//! Error types for edge-list parsing and relation building.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while reading an edge list.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A line is not of the form `v1,v2`.
    #[error("line {line}: expected `v1,v2`, found {text:?}")]
    MalformedEdge {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// A vertex field is not a positive integer.
    #[error("line {line}: invalid vertex id {value:?} (ids are positive integers)")]
    InvalidVertex {
        /// 1-based line number
        line: usize,
        /// The offending field, trimmed
        value: String,
    },

    /// The largest vertex id would produce an oversized matrix.
    #[error("largest vertex id {max_id} exceeds the limit of {limit} vertices")]
    TooManyVertices {
        /// Largest vertex id in the edge list
        max_id: usize,
        /// Configured limit
        limit: usize,
    },

    /// Matrix algebra failed.
    #[error(transparent)]
    Matrix(#[from] concord_matrix::MatrixError),
}
