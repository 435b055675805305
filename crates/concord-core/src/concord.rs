//! The unified Concord facade.
//!
//! [`Concord`] maps a [`ConcordConfig`] onto the component option types and
//! exposes one method per task, taking the raw document text.

use concord_fuzzy::{infer_json, InferenceOptions};
use concord_graph::{build_adjacency_with_limit, build_relations, RelationMatrices};
use concord_matrix::BoolMatrix;
use concord_ranking::{ReconcileOptions, Reconciler, Reconciliation};
use serde::Serialize;
use tracing::{debug, info};

use crate::{config::ConcordConfig, Result};

/// Entry point for every Concord task.
///
/// # Example
///
/// ```rust
/// use concord_core::{Concord, ConcordConfig};
///
/// let concord = Concord::new(ConcordConfig::default())?;
/// let result = concord.reconcile("[1, [2, 3], 4]", "[1, [2, 3], 4]")?;
/// assert_eq!(
///     concord.render(&result)?,
///     r#"{"kernel":[],"consistent_ranking":[1,[2,3],4]}"#
/// );
/// # Ok::<(), concord_core::ConcordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Concord {
    config: ConcordConfig,
    reconciler: Reconciler,
    inference: InferenceOptions,
}

impl Concord {
    /// Create a new facade with the given configuration.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Config`](crate::ConcordError::Config) if the
    /// configuration is invalid.
    pub fn new(config: ConcordConfig) -> Result<Self> {
        config.validate()?;

        let reconciler = Reconciler::with_options(
            ReconcileOptions::new()
                .with_cycle_policy(config.ranking.cycle_policy)
                .with_max_items(config.ranking.max_items),
        );
        let inference = InferenceOptions::new()
            .with_samples(config.fuzzy.samples)
            .with_defuzzification(config.fuzzy.defuzzification);

        info!(
            "Concord initialized: cycle policy {:?}, {} fuzzy samples, {:?}",
            config.ranking.cycle_policy, config.fuzzy.samples, config.fuzzy.defuzzification
        );

        Ok(Self {
            config,
            reconciler,
            inference,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ConcordConfig {
        &self.config
    }

    /// Adjacency matrix of an undirected edge list.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Graph`](crate::ConcordError::Graph) for a malformed
    /// edge list or a vertex id above `graph.max_vertices`.
    pub fn adjacency(&self, edges: &str) -> Result<BoolMatrix> {
        debug!("Building adjacency matrix");
        Ok(build_adjacency_with_limit(edges, self.config.graph.max_vertices)?)
    }

    /// Relation matrices of a directed edge list.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Graph`](crate::ConcordError::Graph) for a malformed
    /// edge list.
    pub fn relations(&self, edges: &str) -> Result<RelationMatrices> {
        debug!("Building relation matrices");
        Ok(build_relations(edges)?)
    }

    /// Reconciles two JSON ranking documents.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Ranking`](crate::ConcordError::Ranking) for invalid
    /// rankings, an item id above `ranking.max_items`, or a rejected cycle.
    pub fn reconcile(&self, ranking_a: &str, ranking_b: &str) -> Result<Reconciliation> {
        debug!("Reconciling rankings");
        Ok(self.reconciler.reconcile_json(ranking_a, ranking_b)?)
    }

    /// Infers a crisp output value from term and rule documents.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Fuzzy`](crate::ConcordError::Fuzzy) for malformed
    /// documents.
    pub fn infer(&self, input_terms: &str, output_terms: &str, rules: &str, value: f64) -> Result<f64> {
        debug!("Inferring output for {}", value);
        Ok(infer_json(input_terms, output_terms, rules, value, self.inference)?)
    }

    /// Serializes a result as JSON, pretty-printed if configured.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Output`](crate::ConcordError::Output) if the value
    /// cannot be serialized.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.config.output.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConcordError;
    use concord_graph::GraphError;
    use concord_ranking::{CyclePolicy, RankingError};

    #[test]
    fn test_options_follow_config() {
        let mut config = ConcordConfig::default();
        config.ranking.cycle_policy = CyclePolicy::Ignore;
        config.ranking.max_items = 25;
        config.fuzzy.samples = 50;
        let concord = Concord::new(config).unwrap();
        assert_eq!(concord.reconciler.options().cycle_policy, CyclePolicy::Ignore);
        assert_eq!(concord.reconciler.options().max_items, 25);
        assert_eq!(concord.inference.samples, 50);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ConcordConfig::default();
        config.fuzzy.samples = 0;
        assert!(matches!(Concord::new(config), Err(ConcordError::Config(_))));
    }

    #[test]
    fn test_size_limits_follow_config() {
        let mut config = ConcordConfig::default();
        config.graph.max_vertices = 4;
        config.ranking.max_items = 4;
        let concord = Concord::new(config).unwrap();

        assert!(concord.adjacency("1,4").is_ok());
        assert!(matches!(
            concord.adjacency("1,5"),
            Err(ConcordError::Graph(GraphError::TooManyVertices { max_id: 5, limit: 4 }))
        ));
        assert!(concord.reconcile("[4]", "[]").is_ok());
        assert!(matches!(
            concord.reconcile("[5]", "[]"),
            Err(ConcordError::Ranking(RankingError::TooManyItems { max_id: 5, limit: 4 }))
        ));
    }

    #[test]
    fn test_render_pretty() {
        let mut config = ConcordConfig::default();
        config.output.pretty = true;
        let concord = Concord::new(config).unwrap();
        assert_eq!(concord.render(&vec![1, 2]).unwrap(), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_component_errors_pass_through() {
        let concord = Concord::new(ConcordConfig::default()).unwrap();
        assert!(matches!(concord.adjacency("1;2"), Err(ConcordError::Graph(_))));
        assert!(matches!(concord.reconcile("[0]", "[]"), Err(ConcordError::Ranking(_))));
        assert!(matches!(concord.infer("{}", "{}", "[]", 0.0), Err(ConcordError::Fuzzy(_))));
    }
}
