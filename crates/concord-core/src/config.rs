//! Configuration types for Concord.

use std::path::Path;

use concord_fuzzy::{Defuzzification, DEFAULT_SAMPLES};
use concord_graph::DEFAULT_MAX_VERTICES;
use concord_ranking::{CyclePolicy, DEFAULT_MAX_ITEMS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ConcordError, loader::load_document, Result};

/// Configuration for the Concord facade.
///
/// Every section and field is optional in a config file; missing values
/// take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordConfig {
    /// Graph task configuration.
    pub graph: GraphConfig,

    /// Ranking reconciliation configuration.
    pub ranking: RankingConfig,

    /// Fuzzy inference configuration.
    pub fuzzy: FuzzyConfig,

    /// Output settings.
    pub output: OutputConfig,
}

impl ConcordConfig {
    /// Loads and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// - [`ConcordError::Io`] if the file cannot be read
    /// - [`ConcordError::Config`] if it is not a valid config
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = load_document(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| ConcordError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ConcordError::Config`] if `fuzzy.samples < 2` or a size limit
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.graph.max_vertices == 0 {
            return Err(ConcordError::Config("graph.max_vertices must be positive".to_string()));
        }
        if self.ranking.max_items == 0 {
            return Err(ConcordError::Config("ranking.max_items must be positive".to_string()));
        }
        if self.fuzzy.samples < 2 {
            return Err(ConcordError::Config(format!(
                "fuzzy.samples must be at least 2, got {}",
                self.fuzzy.samples
            )));
        }
        Ok(())
    }
}

/// Graph task configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Largest vertex id accepted by the adjacency task.
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

/// Ranking reconciliation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// What to do when the cluster order contains a cycle.
    pub cycle_policy: CyclePolicy,

    /// Largest item id accepted in a ranking.
    pub max_items: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::Reject,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Fuzzy inference configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Number of samples over the output range.
    pub samples: usize,

    /// Defuzzification method.
    pub defuzzification: Defuzzification,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            defuzzification: Defuzzification::Centroid,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON results.
    pub pretty: bool,
}
