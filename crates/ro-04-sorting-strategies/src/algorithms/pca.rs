//! First principal component by power iteration.

use crate::domain::errors::StrategyError;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use tracing::debug;

const MAX_ITERATIONS: usize = 1000;
const TOLERANCE: f64 = 1e-12;

fn normalize(v: &mut Array1<f64>) -> f64 {
    let norm = v.dot(v).sqrt();
    if norm > 0.0 {
        v.mapv_inplace(|x| x / norm);
    }
    norm
}

/// Leading eigenvector of `XᵀX` for centered `x`, by power iteration on the
/// Gram matrix.
///
/// If the fixed start vector is orthogonal to every direction of variance,
/// the iteration restarts from the largest column of `XᵀX`. The sign is fixed
/// so that the loading with the largest magnitude is positive.
fn leading_component(x: &Array2<f64>) -> Result<Array1<f64>, StrategyError> {
    let m = x.ncols();
    let gram = x.t().dot(x);
    let mut v: Array1<f64> = (0..m).map(|j| 1.0 / (j as f64 + 1.0)).collect();
    normalize(&mut v);

    let mut next = gram.dot(&v);
    if normalize(&mut next) == 0.0 {
        let column = gram
            .columns()
            .into_iter()
            .max_by(|a, b| a.dot(a).total_cmp(&b.dot(b)))
            .ok_or_else(|| StrategyError::Degenerate("data has no columns".to_string()))?;
        v = column.to_owned();
        if normalize(&mut v) == 0.0 {
            return Err(StrategyError::Degenerate("data has no variance".to_string()));
        }
        debug!(columns = m, "Start vector orthogonal to the data, restarting power iteration");
        next = gram.dot(&v);
        normalize(&mut next);
    }

    for _ in 0..MAX_ITERATIONS {
        let delta = (&next - &v).mapv(f64::abs).sum();
        v = next;
        if delta < TOLERANCE {
            break;
        }
        next = gram.dot(&v);
        // a nonzero vector in the range of a PSD matrix never maps to zero
        if normalize(&mut next) == 0.0 {
            break;
        }
    }

    let pivot = v
        .iter()
        .copied()
        .fold(0.0f64, |best, x| if x.abs() > best.abs() { x } else { best });
    if pivot < 0.0 {
        v.mapv_inplace(|x| -x);
    }
    Ok(v)
}

/// Project each row onto the first principal component of the data.
pub fn first_principal_component(data: ArrayView2<'_, f64>) -> Result<Array1<f64>, StrategyError> {
    if data.nrows() < 2 {
        return Err(StrategyError::TooFewRows {
            algorithm: "PCA",
            min: 2,
            rows: data.nrows(),
        });
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(StrategyError::Degenerate("data contains non-finite values".to_string()));
    }
    let means = data
        .mean_axis(Axis(0))
        .ok_or_else(|| StrategyError::Degenerate("empty data".to_string()))?;
    let centered = &data - &means;
    let component = leading_component(&centered)?;
    Ok(centered.dot(&component))
}
