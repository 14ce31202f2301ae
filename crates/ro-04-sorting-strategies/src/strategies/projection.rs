//! Orderings along a one-dimensional projection.

use crate::algorithms::pca::first_principal_component;
use crate::algorithms::umap::umap_embed;
use crate::config::StrategyConfig;
use crate::domain::errors::StrategyError;
use crate::ports::inbound::SortingStrategy;
use shared_types::{Ensemble, NamedOrdering, Permutation, StrategyFamily};
use tracing::warn;

/// `FPCP` (first principal component) and `UMAP` (1-D embedding).
#[derive(Debug, Clone, Default)]
pub struct ProjectionStrategy {
    config: StrategyConfig,
}

impl ProjectionStrategy {
    pub const FPCP: &'static str = "FPCP";
    pub const UMAP: &'static str = "UMAP";

    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    fn ordering_or_identity(
        name: &str,
        n: usize,
        projection: Result<Vec<f64>, StrategyError>,
    ) -> NamedOrdering {
        match projection {
            Ok(values) => NamedOrdering::new(name, Permutation::argsort(&values)),
            Err(e) => {
                warn!(strategy = name, rows = n, error = %e, "Projection failed, using identity");
                NamedOrdering::new(name, Permutation::identity(n))
            }
        }
    }
}

impl SortingStrategy for ProjectionStrategy {
    fn family(&self) -> StrategyFamily {
        StrategyFamily::Projection
    }

    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
        if data.is_scalar() {
            return Err(StrategyError::RequiresSeries {
                strategy: "projection",
                rows: data.n_rows(),
            });
        }
        let n = data.n_rows();

        let pca = first_principal_component(data.view()).map(|p| p.to_vec());
        let umap = umap_embed(data.view(), 1, &self.config).map(|e| e.column(0).to_vec());

        Ok(vec![
            Self::ordering_or_identity(Self::FPCP, n, pca),
            Self::ordering_or_identity(Self::UMAP, n, umap),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Ensemble {
        let rows = (0..n)
            .map(|i| {
                let t = i as f64;
                vec![t, 2.0 * t + 1.0, -t]
            })
            .collect();
        Ensemble::from_rows(rows).unwrap()
    }

    #[test]
    fn test_pca_orders_a_ramp_monotonically() {
        let shuffle = Permutation::try_new(vec![5, 0, 11, 3, 8, 1, 10, 2, 7, 4, 9, 6]).unwrap();
        let data = ramp(12).reordered(&shuffle).unwrap();
        let out = ProjectionStrategy::default().sort(&data).unwrap();
        assert_eq!(out[0].name, "FPCP");
        assert_eq!(out[1].name, "UMAP");

        let order = out[0].ordering.as_slice();
        let firsts: Vec<f64> = order.iter().map(|&i| data.row(i)[0]).collect();
        let ascending = firsts.windows(2).all(|w| w[0] < w[1]);
        let descending = firsts.windows(2).all(|w| w[0] > w[1]);
        assert!(ascending || descending, "{firsts:?}");
        assert!(out[1].ordering.is_permutation_of(12));
    }

    #[test]
    fn test_failures_fall_back_to_identity() {
        // constant rows: no principal direction; two rows: too few for UMAP
        let data = Ensemble::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let out = ProjectionStrategy::default().sort(&data).unwrap();
        assert_eq!(out.len(), 2);
        for o in out {
            assert_eq!(o.ordering, Permutation::identity(2));
        }
    }

    #[test]
    fn test_scalar_input_is_rejected() {
        let data = Ensemble::from_scalars(vec![1.0, 2.0]).unwrap();
        assert!(ProjectionStrategy::default().sort(&data).is_err());
    }
}
