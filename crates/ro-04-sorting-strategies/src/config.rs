//! Configuration for the sorting strategies.

use serde::{Deserialize, Serialize};

/// Strategy configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Seed of every UMAP layout
    pub umap_seed: u64,
    /// Target dimension of the reduced-clustering embedding
    pub reduced_dimensions: usize,
    /// UMAP neighbourhood size (the point itself included)
    pub n_neighbors: usize,
    /// UMAP curve parameter `a` (fitted for min_dist 0.1, spread 1.0)
    pub min_dist_a: f64,
    /// UMAP curve parameter `b`
    pub min_dist_b: f64,
    /// UMAP optimisation epochs; `None` picks 500, or 200 above 10 000 rows
    pub n_epochs: Option<usize>,
    /// Negative samples per positive edge sample
    pub negative_sample_rate: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            umap_seed: 42,
            reduced_dimensions: 10,
            n_neighbors: 15,
            min_dist_a: 1.577,
            min_dist_b: 0.8951,
            n_epochs: None,
            negative_sample_rate: 5,
        }
    }
}

impl StrategyConfig {
    /// Epoch count for a dataset of `n` rows.
    pub fn epochs_for(&self, n: usize) -> usize {
        self.n_epochs
            .unwrap_or(if n > 10_000 { 200 } else { 500 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StrategyConfig::default();
        assert_eq!(config.umap_seed, 42);
        assert_eq!(config.reduced_dimensions, 10);
        assert_eq!(config.n_neighbors, 15);
        assert_eq!(config.epochs_for(100), 500);
        assert_eq!(config.epochs_for(20_000), 200);
    }

    #[test]
    fn test_explicit_epochs() {
        let config: StrategyConfig = serde_json::from_str(r#"{"n_epochs": 50}"#).unwrap();
        assert_eq!(config.epochs_for(20_000), 50);
        assert_eq!(config.umap_seed, 42);
    }
}
