//! Configuration for the scoring engine.

use ro_01_distance_metrics::Metric;
use serde::{Deserialize, Serialize};

/// Scoring configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Half-width of the neighborhood window, also half the entropy block size
    pub neighborhood: usize,
    /// Metric used by the neighborhood measure
    pub metric: Metric,
    /// Number of equal-width bins per entropy block
    pub entropy_bins: usize,
    /// Seed of the random permutation baseline
    pub entropy_seed: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neighborhood: 10,
            metric: Metric::NormalizedEuclidean,
            entropy_bins: 100,
            entropy_seed: 13,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.neighborhood, 10);
        assert_eq!(config.metric, Metric::NormalizedEuclidean);
        assert_eq!(config.entropy_bins, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"neighborhood": 4}"#).unwrap();
        assert_eq!(config.neighborhood, 4);
        assert_eq!(config.entropy_seed, 13);
    }
}
