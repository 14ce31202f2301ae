//! Hierarchical clustering orderings.
//!
//! Every `(linkage, basis)` pair yields the optimally ordered leaves of its
//! dendrogram. Failures never escape: the affected ordering becomes the
//! identity and a warning is logged.

use crate::algorithms::leaf_order::optimal_leaf_ordering;
use crate::algorithms::linkage::{linkage, Linkage};
use crate::domain::errors::StrategyError;
use crate::ports::inbound::SortingStrategy;
use ndarray::ArrayView2;
use ro_01_distance_metrics::{
    euclidean_to_square, pearson_to_square, upper_triangle, CondensedMatrix, Metric,
};
use serde::{Deserialize, Serialize};
use shared_types::{Ensemble, NamedOrdering, Permutation, StrategyFamily};
use std::fmt;
use tracing::{debug, warn};

/// Pairwise distance used to build the dendrogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceBasis {
    Euclidean,
    NormalizedEuclidean,
    /// `1 - r` of the Pearson correlation
    Pearson,
}

impl DistanceBasis {
    pub const ALL: [DistanceBasis; 3] = [
        DistanceBasis::Euclidean,
        DistanceBasis::NormalizedEuclidean,
        DistanceBasis::Pearson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistanceBasis::Euclidean => "Euclidean",
            DistanceBasis::NormalizedEuclidean => "Normalized Euclidean",
            DistanceBasis::Pearson => "Pearson",
        }
    }

    pub fn metric(&self) -> Metric {
        match self {
            DistanceBasis::Euclidean => Metric::Euclidean,
            DistanceBasis::NormalizedEuclidean => Metric::NormalizedEuclidean,
            DistanceBasis::Pearson => Metric::Pearson,
        }
    }

    /// Condensed distance matrix over the rows of `data`, NaN mapped to 0.
    pub fn condensed(&self, data: ArrayView2<'_, f64>) -> CondensedMatrix {
        let upper = upper_triangle(data, self.metric());
        let square = match self {
            DistanceBasis::Pearson => pearson_to_square(&upper),
            _ => euclidean_to_square(&upper),
        };
        square.sanitized()
    }
}

impl fmt::Display for DistanceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordering name for a linkage and basis, e.g. `"Ward Normalized Euclidean"`.
pub(crate) fn ordering_name(prefix: &str, method: Linkage, basis: DistanceBasis) -> String {
    format!("{prefix}{} {}", method.name(), basis.name())
}

/// Twelve orderings: every [`Linkage`] crossed with every [`DistanceBasis`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusteringStrategy;

impl ClusteringStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Cluster the rows of `data` and name each ordering `"{prefix}{Linkage} {Basis}"`.
    pub fn orderings(&self, data: ArrayView2<'_, f64>, prefix: &str) -> Vec<NamedOrdering> {
        let n = data.nrows();
        let matrices: Vec<(DistanceBasis, CondensedMatrix)> = DistanceBasis::ALL
            .iter()
            .map(|&basis| (basis, basis.condensed(data)))
            .collect();

        let mut out = Vec::with_capacity(Linkage::ALL.len() * matrices.len());
        for method in Linkage::ALL {
            for (basis, distances) in &matrices {
                let name = ordering_name(prefix, method, *basis);
                let ordering = match Self::leaf_order(distances, method) {
                    Ok(ordering) => ordering,
                    Err(e) => {
                        warn!(strategy = %name, rows = n, error = %e, "Clustering failed, using identity");
                        Permutation::identity(n)
                    }
                };
                out.push(NamedOrdering::new(name, ordering));
            }
        }
        out
    }

    fn leaf_order(distances: &CondensedMatrix, method: Linkage) -> Result<Permutation, StrategyError> {
        if distances.is_all_zero() {
            return Err(StrategyError::Degenerate("all pairwise distances are zero".to_string()));
        }
        let merges = linkage(distances, method)?;
        let leaves = optimal_leaf_ordering(&merges, distances)?;
        debug!(method = %method, leaves = leaves.len(), "Leaf order computed");
        Permutation::try_new(leaves).map_err(|e| StrategyError::Degenerate(e.to_string()))
    }
}

impl SortingStrategy for ClusteringStrategy {
    fn family(&self) -> StrategyFamily {
        StrategyFamily::Clustering
    }

    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
        if data.is_scalar() {
            return Err(StrategyError::RequiresSeries {
                strategy: "clustering",
                rows: data.n_rows(),
            });
        }
        Ok(self.orderings(data.view(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(phase: f64, n: usize) -> Vec<f64> {
        (0..n).map(|t| (t as f64 * 0.3 + phase).sin()).collect()
    }

    #[test]
    fn test_twelve_named_orderings() {
        let rows = (0..8).map(|i| wave(i as f64 * 0.4, 20)).collect();
        let data = Ensemble::from_rows(rows).unwrap();
        let out = ClusteringStrategy::new().sort(&data).unwrap();

        assert_eq!(out.len(), 12);
        assert_eq!(out[0].name, "Ward Euclidean");
        assert_eq!(out[1].name, "Ward Normalized Euclidean");
        assert_eq!(out[2].name, "Ward Pearson");
        assert_eq!(out[11].name, "Complete Pearson");
        for o in &out {
            assert!(o.ordering.is_permutation_of(8), "{}", o.name);
        }
    }

    #[test]
    fn test_phase_ramp_is_recovered() {
        // rows shuffled along a smooth phase ramp come back as a monotone walk
        let phases = [3, 0, 6, 1, 5, 2, 4];
        let rows = phases.iter().map(|&p| vec![p as f64, 2.0 * p as f64]).collect();
        let data = Ensemble::from_rows(rows).unwrap();
        let out = ClusteringStrategy::new().sort(&data).unwrap();

        let ward = &out[0];
        assert_eq!(ward.name, "Ward Euclidean");
        let walk: Vec<i32> = ward.ordering.as_slice().iter().map(|&i| phases[i]).collect();
        let up = walk.windows(2).all(|w| w[0] < w[1]);
        let down = walk.windows(2).all(|w| w[0] > w[1]);
        assert!(up || down, "{walk:?}");
    }

    #[test]
    fn test_identical_rows_give_identity() {
        let data = Ensemble::from_rows(vec![vec![1.0, 2.0, 3.0]; 5]).unwrap();
        let out = ClusteringStrategy::new().sort(&data).unwrap();
        for o in out {
            assert_eq!(o.ordering, Permutation::identity(5), "{}", o.name);
        }
    }

    #[test]
    fn test_mirrored_signals_sit_at_the_ends() {
        // row 0 is sin, row 5 is -sin; the rest interpolate between them
        let base = wave(0.0, 30);
        let rows: Vec<Vec<f64>> = (0..6)
            .map(|k| {
                let w = 1.0 - 2.0 * k as f64 / 5.0;
                base.iter().map(|v| w * v).collect()
            })
            .collect();
        let shuffle = Permutation::try_new(vec![2, 5, 0, 3, 1, 4]).unwrap();
        let data = Ensemble::from_rows(rows).unwrap().reordered(&shuffle).unwrap();
        let out = ClusteringStrategy::new().sort(&data).unwrap();

        let ward = out[0].ordering.as_slice();
        // shuffled position of the original sin row is 2, of -sin is 1
        let ends = [ward[0], ward[5]];
        assert!(ends.contains(&2) && ends.contains(&1), "{ward:?}");
    }

    #[test]
    fn test_scalar_input_is_rejected() {
        let data = Ensemble::from_scalars(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(ClusteringStrategy::new().sort(&data).is_err());
    }
}
