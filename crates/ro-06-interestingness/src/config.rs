//! Configuration for interestingness detection.

use crate::domain::errors::InterestingnessError;
use ro_01_distance_metrics::Metric;
use serde::{Deserialize, Serialize};

/// Interestingness configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestingnessConfig {
    /// Values strictly between this row quantile and its complement are flattened
    pub central_quantile: f64,
    /// Side of the Gaussian kernel (odd); sigma is a quarter of it
    pub kernel_size: usize,
    /// Smoothed values strictly above this quantile become 1
    pub binarize_quantile: f64,
    /// Rows whose dissimilarity is strictly above this quantile are salient
    pub score_quantile: f64,
    /// Salient rows at most this far apart share a range
    pub gap_tolerance: usize,
    /// Row-to-row metric of the local dissimilarity
    pub metric: Metric,
    /// Rows compared on each side
    pub neighbor_offset: usize,
}

impl Default for InterestingnessConfig {
    fn default() -> Self {
        Self {
            central_quantile: 0.1,
            kernel_size: 5,
            binarize_quantile: 0.995,
            score_quantile: 0.9,
            gap_tolerance: 2,
            metric: Metric::Hellinger,
            neighbor_offset: 2,
        }
    }
}

impl InterestingnessConfig {
    pub fn validate(&self) -> Result<(), InterestingnessError> {
        if self.kernel_size % 2 == 0 {
            return Err(InterestingnessError::InvalidConfig(format!(
                "kernel_size must be odd, got {}",
                self.kernel_size
            )));
        }
        for (name, q) in [
            ("central_quantile", self.central_quantile),
            ("binarize_quantile", self.binarize_quantile),
            ("score_quantile", self.score_quantile),
        ] {
            if !(q > 0.0 && q < 1.0) {
                return Err(InterestingnessError::InvalidConfig(format!(
                    "{name} must lie in (0, 1), got {q}"
                )));
            }
        }
        if self.neighbor_offset == 0 {
            return Err(InterestingnessError::InvalidConfig(
                "neighbor_offset must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
