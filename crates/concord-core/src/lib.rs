//! # Concord Core
//!
//! Unified facade over the Concord relation and inference tasks.
//! Loads configuration and documents, dispatches to the component crates,
//! and renders results as JSON.
//!
//! ## Tasks
//!
//! | Task | Component | Input | Output |
//! |------|-----------|-------|--------|
//! | Adjacency | `concord-graph` | Undirected edge list | Symmetric 0/1 matrix |
//! | Relations | `concord-graph` | Directed edge list | r1..r5 matrices |
//! | Reconcile | `concord-ranking` | Two JSON rankings | Kernel + consistent ranking |
//! | Infer | `concord-fuzzy` | Terms, rules, crisp value | Crisp value |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        CONCORD CORE                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │      ConcordConfig ──▶ ┌─────────────────┐ ◀── load_document    │
//! │                        │     Concord     │                      │
//! │                        └────────┬────────┘                      │
//! │                                 │                               │
//! │         ┌───────────────────────┼───────────────────┐           │
//! │         ▼                       ▼                   ▼           │
//! │  ┌─────────────┐        ┌─────────────┐     ┌─────────────┐     │
//! │  │    Graph    │        │   Ranking   │     │    Fuzzy    │     │
//! │  └──────┬──────┘        └──────┬──────┘     └─────────────┘     │
//! │         └──────────┬───────────┘                                │
//! │                    ▼                                            │
//! │             ┌─────────────┐                                     │
//! │             │   Matrix    │                                     │
//! │             └─────────────┘                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use concord_core::{load_document, Concord, ConcordConfig};
//!
//! let concord = Concord::new(ConcordConfig::from_file("concord.json")?)?;
//! let result = concord.reconcile(
//!     &load_document("ranking_a.json")?,
//!     &load_document("ranking_b.json")?,
//! )?;
//! println!("{}", concord.render(&result)?);
//! # Ok::<(), concord_core::ConcordError>(())
//! ```

mod concord;
mod config;
mod error;
mod loader;

pub use concord::Concord;
pub use config::{ConcordConfig, FuzzyConfig, GraphConfig, OutputConfig, RankingConfig};
pub use error::ConcordError;
pub use loader::load_document;

// Re-export component types for convenience
pub use concord_fuzzy::Defuzzification;
pub use concord_graph::RelationMatrices;
pub use concord_matrix::BoolMatrix;
pub use concord_ranking::{CyclePolicy, KernelPair, RankGroup, Ranking, Reconciliation};

/// Core result type for Concord operations.
pub type Result<T> = std::result::Result<T, ConcordError>;
