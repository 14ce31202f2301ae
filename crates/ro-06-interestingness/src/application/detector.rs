//! # Interestingness Detector
//!
//! 1. Order the rows, scale each row to `[0, 1]`, flatten its central
//!    quantile band and reflect it around its mean.
//! 2. Smooth with a Gaussian kernel and keep only the top response as 1s.
//! 3. Score each row by its dissimilarity to nearby rows (on the scaled rows).
//! 4. Group high-scoring rows into ranges and pick a representative column
//!    from the binarized response.

use crate::algorithms::gaussian::{binarize, convolve_same, gaussian_kernel};
use crate::algorithms::preprocess::{emphasize_extremes, minmax_rows};
use crate::algorithms::segments::{local_dissimilarity, salient_ranges, to_segments};
use crate::config::InterestingnessConfig;
use crate::domain::errors::InterestingnessError;
use shared_types::{Ensemble, InterestingnessSegment, Permutation};
use tracing::debug;

pub struct InterestingnessDetector {
    config: InterestingnessConfig,
}

impl InterestingnessDetector {
    pub fn new(config: InterestingnessConfig) -> Result<Self, InterestingnessError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InterestingnessConfig {
        &self.config
    }

    /// Salient ranges of `data` arranged by `ordering`. Positions refer to
    /// the ordered rows.
    pub fn detect(
        &self,
        data: &Ensemble,
        ordering: &Permutation,
    ) -> Result<Vec<InterestingnessSegment>, InterestingnessError> {
        let ordered = data.reordered(ordering)?;
        let n = ordered.n_rows();
        if n < 2 {
            return Err(InterestingnessError::TooFewRows { rows: n });
        }

        let normalized = minmax_rows(ordered.view());
        let emphasized = emphasize_extremes(&normalized, self.config.central_quantile);
        let smoothed = convolve_same(emphasized.view(), &gaussian_kernel(self.config.kernel_size));
        let binary = binarize(&smoothed, self.config.binarize_quantile);

        let scores = local_dissimilarity(
            normalized.view(),
            self.config.metric,
            self.config.neighbor_offset,
        );
        let ranges = salient_ranges(&scores, self.config.score_quantile, self.config.gap_tolerance);
        let segments = to_segments(&ranges, &binary);

        debug!(
            rows = n,
            cols = ordered.n_cols(),
            salient = binary.sum(),
            segments = segments.len(),
            "Interestingness computed"
        );
        Ok(segments)
    }
}

impl Default for InterestingnessDetector {
    fn default() -> Self {
        Self {
            config: InterestingnessConfig::default(),
        }
    }
}
