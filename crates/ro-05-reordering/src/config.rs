//! Configuration for the reordering coordinator.

use ro_02_scoring::ScoringConfig;
use ro_04_sorting_strategies::StrategyConfig;
use serde::{Deserialize, Serialize};

/// Reordering configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderingConfig {
    /// Checkpoint namespace (first component of every checkpoint key)
    pub dataset: String,
    pub scoring: ScoringConfig,
    pub strategies: StrategyConfig,
    /// Process the series of a stage concurrently
    pub parallel_series: bool,
}

impl Default for ReorderingConfig {
    fn default() -> Self {
        Self {
            dataset: "dataset".to_string(),
            scoring: ScoringConfig::default(),
            strategies: StrategyConfig::default(),
            parallel_series: false,
        }
    }
}

impl ReorderingConfig {
    pub fn for_dataset(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            ..Self::default()
        }
    }
}
