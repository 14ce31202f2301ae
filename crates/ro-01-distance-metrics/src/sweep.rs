//! Metric diagnostics: nearest neighbour of the first row under each metric.

use crate::metric::Metric;
use ndarray::ArrayView2;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one metric in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepEntry {
    pub metric: Metric,
    /// Row closest to row 0, or `None` for fewer than two rows (or all NaN).
    pub nearest: Option<usize>,
    /// Metric value between row 0 and `nearest`.
    pub value: Option<f64>,
    pub elapsed: Duration,
}

/// Run every metric in `metrics` from row 0 against all other rows.
///
/// Pass [`Metric::default_sweep`] to skip the expensive metrics.
pub fn distance_sweep(data: ArrayView2<'_, f64>, metrics: &[Metric]) -> Vec<SweepEntry> {
    metrics
        .iter()
        .map(|&metric| {
            let start = Instant::now();
            let mut best: Option<(usize, f64)> = None;
            for j in 1..data.nrows() {
                let v = metric.distance(data.row(0), data.row(j));
                if v.is_nan() {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((_, b)) if metric.is_similarity() => v > b,
                    Some((_, b)) => v < b,
                };
                if better {
                    best = Some((j, v));
                }
            }
            let elapsed = start.elapsed();
            debug!(metric = %metric, nearest = ?best.map(|b| b.0), ?elapsed, "Metric sweep");
            SweepEntry {
                metric,
                nearest: best.map(|b| b.0),
                value: best.map(|b| b.1),
                elapsed,
            }
        })
        .collect()
}
