//! Clustering on a UMAP embedding.

use super::clustering::{ordering_name, ClusteringStrategy, DistanceBasis};
use crate::algorithms::linkage::Linkage;
use crate::algorithms::umap::umap_embed;
use crate::config::StrategyConfig;
use crate::domain::errors::StrategyError;
use crate::ports::inbound::SortingStrategy;
use shared_types::{Ensemble, NamedOrdering, Permutation, StrategyFamily};
use tracing::warn;

/// Embeds rows into `reduced_dimensions` with UMAP, then runs
/// [`ClusteringStrategy`] on the embedding. Orderings are prefixed `"Reduced "`.
#[derive(Debug, Clone, Default)]
pub struct ReducedClusteringStrategy {
    config: StrategyConfig,
    clustering: ClusteringStrategy,
}

impl ReducedClusteringStrategy {
    pub const PREFIX: &'static str = "Reduced ";

    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            clustering: ClusteringStrategy::new(),
        }
    }

    fn identity_for_all(n: usize) -> Vec<NamedOrdering> {
        Linkage::ALL
            .iter()
            .flat_map(|&method| {
                DistanceBasis::ALL.iter().map(move |&basis| {
                    NamedOrdering::new(
                        ordering_name(Self::PREFIX, method, basis),
                        Permutation::identity(n),
                    )
                })
            })
            .collect()
    }
}

impl SortingStrategy for ReducedClusteringStrategy {
    fn family(&self) -> StrategyFamily {
        StrategyFamily::ReducedClustering
    }

    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
        if data.is_scalar() {
            return Err(StrategyError::RequiresSeries {
                strategy: "reduced clustering",
                rows: data.n_rows(),
            });
        }

        match umap_embed(data.view(), self.config.reduced_dimensions, &self.config) {
            Ok(embedding) => Ok(self.clustering.orderings(embedding.view(), Self::PREFIX)),
            Err(e) => {
                warn!(
                    rows = data.n_rows(),
                    dimensions = self.config.reduced_dimensions,
                    error = %e,
                    "Reduction failed, using identity for every ordering"
                );
                Ok(Self::identity_for_all(data.n_rows()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StrategyConfig {
        StrategyConfig {
            n_epochs: Some(50),
            ..StrategyConfig::default()
        }
    }

    #[test]
    fn test_reduced_names_and_permutations() {
        let rows = (0..20)
            .map(|i| (0..12).map(|t| ((t + i) as f64 * 0.5).sin()).collect())
            .collect();
        let data = Ensemble::from_rows(rows).unwrap();
        let out = ReducedClusteringStrategy::new(config()).sort(&data).unwrap();

        assert_eq!(out.len(), 12);
        assert_eq!(out[0].name, "Reduced Ward Euclidean");
        assert_eq!(out[1].name, "Reduced Ward Normalized Euclidean");
        for o in &out {
            assert!(o.name.starts_with("Reduced "));
            assert!(o.ordering.is_permutation_of(20));
        }
    }

    #[test]
    fn test_failed_reduction_gives_identity_everywhere() {
        let data = Ensemble::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let out = ReducedClusteringStrategy::new(config()).sort(&data).unwrap();
        assert_eq!(out.len(), 12);
        assert_eq!(out[11].name, "Reduced Complete Pearson");
        for o in out {
            assert_eq!(o.ordering, Permutation::identity(2));
        }
    }
}
