//! Error types for fuzzy inference.

use thiserror::Error;

/// Result type alias for fuzzy operations.
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Errors raised while loading term definitions or configuring inference.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// A document is not valid JSON of the expected shape.
    #[error("malformed fuzzy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A term document does not hold exactly one linguistic variable.
    #[error("term document must define exactly one variable, found {found}")]
    VariableCount {
        /// Number of top-level keys found
        found: usize,
    },

    /// A term definition is unusable.
    #[error("term {term:?}: {reason}")]
    InvalidTerm {
        /// Term id
        term: String,
        /// What is wrong with it
        reason: String,
    },

    /// Control points passed to [`Trapezoid::new`](crate::Trapezoid::new)
    /// are unusable.
    #[error("invalid membership shape: {reason}")]
    InvalidShape {
        /// What is wrong with the points
        reason: String,
    },

    /// A variable has no terms, so its range is undefined.
    #[error("variable {variable:?} has no terms")]
    EmptyVariable {
        /// Variable name
        variable: String,
    },

    /// Fewer than two samples cannot span the output range.
    #[error("sample count must be at least 2, got {samples}")]
    InvalidSamples {
        /// Requested sample count
        samples: usize,
    },
}
