//! The reconciliation pipeline.
//!
//! ```text
//! ranking A ──▶ precedence A ─┐
//!                             ├─▶ agreement ─▶ kernel ─┐
//! ranking B ──▶ precedence B ─┘                        ▼
//!                                     preference (A AND B + kernel ties)
//!                                                      │
//!                           equivalence ─▶ Warshall ─▶ clusters
//!                                                      │
//!                                           topological sequencing
//!                                                      ▼
//!                                          kernel + consistent ranking
//! ```

use concord_matrix::transitive_closure;
use tracing::{debug, info};

use crate::cluster::equivalence_clusters;
use crate::combine::Agreement;
use crate::error::{RankingError, Result};
use crate::parse::parse_ranking;
use crate::precedence::precedence_matrix;
use crate::preference::{equivalence_matrix, preference_matrix};
use crate::sequence::{sequence_clusters, CyclePolicy};
use crate::types::{Ranking, Reconciliation};

/// Default upper bound on the item universe.
pub const DEFAULT_MAX_ITEMS: usize = 10_000;

/// Options for [`Reconciler`].
///
/// # Example
///
/// ```rust
/// use concord_ranking::{CyclePolicy, ReconcileOptions};
///
/// let options = ReconcileOptions::new()
///     .with_cycle_policy(CyclePolicy::Ignore)
///     .with_max_items(500);
/// assert_eq!(options.cycle_policy, CyclePolicy::Ignore);
/// assert_eq!(options.max_items, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Handling of a cyclic cluster order.
    pub cycle_policy: CyclePolicy,
    /// Largest accepted item id; matrices are `max_items²` at most.
    pub max_items: usize,
}

impl ReconcileOptions {
    /// Defaults: cycles are rejected, at most 10 000 items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cycle_policy: CyclePolicy::Reject,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    /// Sets the cycle policy.
    #[must_use]
    pub const fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Sets the largest accepted item id.
    #[must_use]
    pub const fn with_max_items(mut self, limit: usize) -> Self {
        self.max_items = limit;
        self
    }
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconciles pairs of rankings.
///
/// Holds only options; every call builds its own matrices, so one
/// reconciler can serve any number of independent calls.
///
/// # Example
///
/// ```rust
/// use concord_ranking::Reconciler;
///
/// let result = Reconciler::new().reconcile_json("[1, [2, 3], 4]", "[1, [2, 3], 4]")?;
/// assert!(result.kernel.is_empty());
/// assert_eq!(
///     serde_json::to_string(&result.consistent_ranking).unwrap(),
///     "[1,[2,3],4]"
/// );
/// # Ok::<(), concord_ranking::RankingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

impl Reconciler {
    /// Creates a reconciler with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ReconcileOptions::new())
    }

    /// Creates a reconciler with custom options.
    #[must_use]
    pub fn with_options(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Returns the active options.
    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Parses two JSON ranking documents and reconciles them.
    ///
    /// # Errors
    ///
    /// Any parse or validation error from [`parse_ranking`], or a
    /// reconciliation error from [`Reconciler::reconcile`].
    pub fn reconcile_json(&self, ranking_a: &str, ranking_b: &str) -> Result<Reconciliation> {
        let a = parse_ranking(ranking_a)?;
        let b = parse_ranking(ranking_b)?;
        self.reconcile(&a, &b)
    }

    /// Reconciles two rankings into a kernel of contradictions and a
    /// consistent ranking over `1..=max_id`.
    ///
    /// `max_id` is the largest id in either ranking; two rankings without
    /// items yield an empty result.
    ///
    /// # Errors
    ///
    /// - [`RankingError::InvalidItem`](crate::RankingError::InvalidItem) /
    ///   [`RankingError::DuplicateItem`](crate::RankingError::DuplicateItem)
    ///   for malformed rankings
    /// - [`RankingError::TooManyItems`](crate::RankingError::TooManyItems)
    ///   if the largest id exceeds [`ReconcileOptions::max_items`]
    /// - [`RankingError::CyclicOrder`](crate::RankingError::CyclicOrder) if
    ///   the cluster order is cyclic and the policy rejects cycles
    pub fn reconcile(&self, a: &Ranking, b: &Ranking) -> Result<Reconciliation> {
        a.validate()?;
        b.validate()?;

        let max_id = match a.max_item().max(b.max_item()) {
            Some(id) => id as usize,
            None => {
                debug!("Both rankings are empty");
                return Ok(Reconciliation::default());
            }
        };
        if max_id > self.options.max_items {
            return Err(RankingError::TooManyItems {
                max_id,
                limit: self.options.max_items,
            });
        }

        let precedence_a = precedence_matrix(a, max_id)?;
        let precedence_b = precedence_matrix(b, max_id)?;

        let agreement = Agreement::between(&precedence_a, &precedence_b)?;
        let kernel = agreement.kernel();
        debug!("Kernel of contradictions: {} pairs over {} items", kernel.len(), max_id);

        let preference = preference_matrix(&agreement.consistency, &kernel);
        let closure = transitive_closure(&equivalence_matrix(&preference)?);
        let clusters = equivalence_clusters(&closure);
        debug!("Found {} equivalence clusters", clusters.len());

        let consistent_ranking = sequence_clusters(&clusters, &preference, self.options.cycle_policy)?;

        info!(
            "Reconciled {} items: {} kernel pairs, {} ranks",
            max_id,
            kernel.len(),
            consistent_ranking.len()
        );

        Ok(Reconciliation {
            kernel,
            consistent_ranking,
        })
    }
}

/// Reconciles two rankings with default options.
///
/// # Errors
///
/// See [`Reconciler::reconcile`].
pub fn reconcile(a: &Ranking, b: &Ranking) -> Result<Reconciliation> {
    Reconciler::new().reconcile(a, b)
}
