//! Scoring Engine
//!
//! Runs the three measures on an ensemble (or on a reordered working copy of
//! it) and collects a [`ScoreTriple`]. A failing measure is logged and
//! reported as `None`.

use crate::algorithms::entropy::seeded_rng;
use crate::algorithms::{baseline_convolution, baseline_entropy, neighborhood_dist};
use crate::config::ScoringConfig;
use crate::domain::errors::ScoreError;
use shared_types::{Ensemble, Permutation, ScoreTriple};
use std::time::Instant;
use tracing::{debug, warn};

/// Scoring Engine
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with default config
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Create an engine with custom config
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score the ensemble in its current row order.
    pub fn score(&self, data: &Ensemble) -> ScoreTriple {
        let view = data.view();
        let shape = (data.n_rows(), data.n_cols());

        let neighborhood = guarded("neighborhood", shape, || {
            neighborhood_dist(view, self.config.neighborhood, self.config.metric)
        });
        let convolution = guarded("convolution", shape, || {
            baseline_convolution(view, data.is_scalar())
        });
        let entropy = guarded("entropy", shape, || {
            let mut rng = seeded_rng(self.config.entropy_seed);
            baseline_entropy(
                view,
                self.config.neighborhood,
                self.config.entropy_bins,
                &mut rng,
            )
        });

        ScoreTriple {
            neighborhood,
            convolution,
            entropy,
        }
    }

    /// Score the ensemble with its rows arranged by `ordering`.
    pub fn score_ordering(
        &self,
        data: &Ensemble,
        ordering: &Permutation,
    ) -> Result<ScoreTriple, ScoreError> {
        let reordered = data.reordered(ordering)?;
        Ok(self.score(&reordered))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn guarded<T>(
    measure: &'static str,
    shape: (usize, usize),
    f: impl FnOnce() -> Result<T, ScoreError>,
) -> Option<T> {
    let start = Instant::now();
    let result = f();
    debug!(measure, elapsed = ?start.elapsed(), "Measure finished");
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(measure, rows = shape.0, cols = shape.1, error = %e, "Measure failed");
            None
        }
    }
}
