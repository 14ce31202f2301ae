//! Neighborhood distance score.
//!
//! For every row `i` the window `[max(0, i - nb), min(i + nb, n))` selects a
//! square block of the pairwise matrix; the score is the sum of the upper
//! triangle (`p <= q`) inside every block. Lower means similar rows sit
//! closer together.
//!
//! A cell `(p, q)` falls inside the windows of
//! `max(0, q - nb + 1) ..= min(p + nb, n - 1)`, so only cells with
//! `q - p < 2 * nb` ever contribute. [`neighborhood_dist`] evaluates that
//! band once and weighs each cell by its window count, needing `O(n * nb)`
//! metric calls instead of `O(n^2)`.

use crate::domain::errors::ScoreError;
use ndarray::ArrayView2;
use rayon::prelude::*;
use ro_01_distance_metrics::{upper_triangle, Metric};

const MEASURE: &str = "Neighborhood score";

/// Number of windows containing cell `(p, q)` with `p <= q`.
fn window_count(p: usize, q: usize, neighborhood: usize, n: usize) -> usize {
    let first = (q + 1).saturating_sub(neighborhood);
    let last = (p + neighborhood).min(n - 1);
    if last < first {
        0
    } else {
        last - first + 1
    }
}

fn check(data: &ArrayView2<'_, f64>, total: f64) -> Result<f64, ScoreError> {
    if data.nrows() == 0 {
        return Err(ScoreError::EmptyEnsemble);
    }
    if !total.is_finite() {
        return Err(ScoreError::NonFinite { measure: MEASURE });
    }
    Ok(total)
}

/// Banded neighborhood score.
pub fn neighborhood_dist(
    data: ArrayView2<'_, f64>,
    neighborhood: usize,
    metric: Metric,
) -> Result<f64, ScoreError> {
    let n = data.nrows();
    if n == 0 {
        return Err(ScoreError::EmptyEnsemble);
    }
    let band = 2 * neighborhood;

    // row sums are added in index order
    let rows: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|p| {
            (p..n.min(p + band))
                .map(|q| {
                    let count = window_count(p, q, neighborhood, n);
                    if count == 0 {
                        0.0
                    } else {
                        count as f64 * metric.distance(data.row(p), data.row(q))
                    }
                })
                .sum::<f64>()
        })
        .collect();
    let total = rows.iter().sum();

    check(&data, total)
}

/// Reference implementation over the full upper triangle.
pub fn neighborhood_dist_naive(
    data: ArrayView2<'_, f64>,
    neighborhood: usize,
    metric: Metric,
) -> Result<f64, ScoreError> {
    let n = data.nrows();
    if n == 0 {
        return Err(ScoreError::EmptyEnsemble);
    }
    let dist = upper_triangle(data, metric);

    let mut total = 0.0;
    for i in 0..n {
        let lower = i.saturating_sub(neighborhood);
        let upper = (i + neighborhood).min(n);
        for p in lower..upper {
            for q in lower..upper {
                total += dist[[p, q]];
            }
        }
    }

    check(&data, total)
}
