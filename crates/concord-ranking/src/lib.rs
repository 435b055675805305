//! # Ranking Reconciliation
//!
//! Reconciles two partial rankings (orders with ties) of the same items into
//! a single consistent ranking, and reports the pairs the two rankings
//! disagree on: the kernel of contradictions.
//!
//! ## Pipeline
//!
//! | Stage | Item |
//! |-------|------|
//! | Parse | [`parse_ranking`] |
//! | Precedence | [`precedence_matrix`] |
//! | Pair classification | [`Agreement`] |
//! | Preference | [`preference_matrix`], [`equivalence_matrix`] |
//! | Closure | [`concord_matrix::transitive_closure`] |
//! | Clusters | [`equivalence_clusters`] |
//! | Sequencing | [`sequence_clusters`] |
//!
//! [`Reconciler`] runs the whole pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use concord_ranking::{KernelPair, Reconciler};
//!
//! let result = Reconciler::new().reconcile_json("[1, 2, 3]", "[1, 3, 2]")?;
//!
//! // 2 and 3 are ordered differently by the two rankings...
//! assert_eq!(result.kernel, vec![KernelPair(2, 3)]);
//! // ...so they end up tied.
//! assert_eq!(serde_json::to_string(&result.consistent_ranking).unwrap(), "[1,[2,3]]");
//! # Ok::<(), concord_ranking::RankingError>(())
//! ```
//!
//! ## Item Universe
//!
//! The universe is `1..=max_id`, `max_id` being the largest id in either
//! ranking. An id missing from a ranking is placed with that ranking's first
//! group, and ids missing from both still appear in the output.

mod cluster;
mod combine;
mod error;
mod parse;
mod precedence;
mod preference;
mod reconcile;
mod sequence;
mod types;

pub use cluster::equivalence_clusters;
pub use combine::Agreement;
pub use error::{RankingError, Result};
pub use parse::parse_ranking;
pub use precedence::precedence_matrix;
pub use preference::{equivalence_matrix, preference_matrix};
pub use reconcile::{reconcile, ReconcileOptions, Reconciler, DEFAULT_MAX_ITEMS};
pub use sequence::{cluster_order, sequence_clusters, topological_order, CyclePolicy};
pub use types::{ItemId, KernelPair, RankGroup, Ranking, Reconciliation};
