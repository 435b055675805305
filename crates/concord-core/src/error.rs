//! Error types for Concord Core.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for Concord operations.
#[derive(Debug, Error)]
pub enum ConcordError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input document could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A result could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Graph error passthrough.
    #[error("Graph error: {0}")]
    Graph(#[from] concord_graph::GraphError),

    /// Ranking error passthrough.
    #[error("Ranking error: {0}")]
    Ranking(#[from] concord_ranking::RankingError),

    /// Fuzzy error passthrough.
    #[error("Fuzzy error: {0}")]
    Fuzzy(#[from] concord_fuzzy::FuzzyError),
}
