//! Metric selector.

use crate::metrics;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every supported pairwise metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Euclidean,
    NormalizedEuclidean,
    ZNormalizedEuclidean,
    Cosine,
    Pearson,
    Spearman,
    Bhattacharyya,
    Wasserstein,
    DynamicTimeWarping,
    Frechet,
    Manhattan,
    Hellinger,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::Euclidean,
        Metric::NormalizedEuclidean,
        Metric::ZNormalizedEuclidean,
        Metric::Cosine,
        Metric::Pearson,
        Metric::Spearman,
        Metric::Bhattacharyya,
        Metric::Wasserstein,
        Metric::DynamicTimeWarping,
        Metric::Frechet,
        Metric::Manhattan,
        Metric::Hellinger,
    ];

    /// Evaluate the metric on two equal-length vectors.
    pub fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        match self {
            Metric::Euclidean => metrics::euclidean(a, b),
            Metric::NormalizedEuclidean => metrics::normalized_euclidean(a, b),
            Metric::ZNormalizedEuclidean => metrics::z_normalized_euclidean(a, b),
            Metric::Cosine => metrics::cosine(a, b),
            Metric::Pearson => metrics::pearson(a, b),
            Metric::Spearman => metrics::spearman(a, b),
            Metric::Bhattacharyya => metrics::bhattacharyya_distance(a, b),
            Metric::Wasserstein => metrics::wasserstein(a, b),
            Metric::DynamicTimeWarping => metrics::dynamic_time_warping(a, b),
            Metric::Frechet => metrics::frechet_dist(a, b),
            Metric::Manhattan => metrics::manhattan(a, b),
            Metric::Hellinger => metrics::hellinger(a, b),
        }
    }

    /// True when higher values mean "more alike".
    pub fn is_similarity(&self) -> bool {
        matches!(
            self,
            Metric::Pearson | Metric::Spearman | Metric::Bhattacharyya
        )
    }

    /// Quadratic-time metrics, excluded from exhaustive sweeps.
    pub fn is_expensive(&self) -> bool {
        matches!(self, Metric::DynamicTimeWarping | Metric::Frechet)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Euclidean => "Euclidean",
            Metric::NormalizedEuclidean => "Normalized Euclidean",
            Metric::ZNormalizedEuclidean => "Z-Normalized Euclidean",
            Metric::Cosine => "Cosine",
            Metric::Pearson => "Pearson Correlation",
            Metric::Spearman => "Spearman Correlation",
            Metric::Bhattacharyya => "Bhattacharyya Distance",
            Metric::Wasserstein => "Wasserstein Distance",
            Metric::DynamicTimeWarping => "Dynamic Time Warping Distance",
            Metric::Frechet => "Frechet Distance",
            Metric::Manhattan => "Manhattan",
            Metric::Hellinger => "Hellinger",
        }
    }

    pub fn default_sweep() -> Vec<Metric> {
        Self::ALL
            .iter()
            .copied()
            .filter(|m| !m.is_expensive())
            .collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
