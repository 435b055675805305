//! Error types for ranking reconciliation.

use thiserror::Error;

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors that can occur while parsing or reconciling rankings.
#[derive(Debug, Error)]
pub enum RankingError {
    /// The ranking document is not valid JSON of the expected shape.
    #[error("malformed ranking document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item id is zero.
    #[error("invalid item id {id}: ids start at 1")]
    InvalidItem {
        /// The rejected id
        id: u32,
    },

    /// The same item occurs twice within one ranking.
    #[error("item {id} appears more than once in the same ranking")]
    DuplicateItem {
        /// The repeated id
        id: u32,
    },

    /// An item lies outside the matrix universe.
    #[error("item {id} exceeds the universe size {max_id}")]
    ItemOutOfRange {
        /// The rejected id
        id: u32,
        /// Size of the universe
        max_id: usize,
    },

    /// The item universe is larger than the configured limit.
    #[error("largest item id {max_id} exceeds the limit of {limit} items")]
    TooManyItems {
        /// Largest id across both rankings
        max_id: usize,
        /// Configured limit
        limit: usize,
    },

    /// The order between equivalence clusters is not acyclic.
    ///
    /// Cannot arise from two well-formed rankings; only reported under
    /// [`CyclePolicy::Reject`](crate::CyclePolicy::Reject).
    #[error("cluster order contains a cycle through {clusters:?}")]
    CyclicOrder {
        /// Clusters on the detected cycle, in traversal order
        clusters: Vec<Vec<u32>>,
    },

    /// Matrix algebra failed.
    #[error(transparent)]
    Matrix(#[from] concord_matrix::MatrixError),
}
