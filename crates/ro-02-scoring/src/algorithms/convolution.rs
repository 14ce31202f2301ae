//! Convolution score.
//!
//! A high-pass kernel (all `-1`, center `kr * kc - 1`) responds to local
//! contrast. The data is min-max normalized globally, convolved in full mode
//! with wrap-around boundaries, and the response summed.

use crate::domain::errors::ScoreError;
use ndarray::{Array2, ArrayView2};

const MEASURE: &str = "Convolution score";

/// Kernel side for a data dimension: 10% of it, clamped to `[3, 10]`.
fn kernel_side(len: usize) -> usize {
    ((len as f64 * 0.1) as usize).clamp(3, 10)
}

/// High-pass kernel sized for `rows x cols` data.
pub fn high_pass_kernel(rows: usize, cols: usize) -> Array2<f64> {
    let kr = kernel_side(rows);
    let kc = kernel_side(cols);
    let mut kernel = Array2::from_elem((kr, kc), -1.0);
    kernel[[kr / 2, kc / 2]] = (kr * kc) as f64 - 1.0;
    kernel
}

/// Full 2-D convolution where input indices wrap around both axes.
pub fn convolve_full_wrap(data: ArrayView2<'_, f64>, kernel: ArrayView2<'_, f64>) -> Array2<f64> {
    let (rows, cols) = data.dim();
    let (kr, kc) = kernel.dim();
    let mut out = Array2::zeros((rows + kr - 1, cols + kc - 1));

    for ((i, j), value) in out.indexed_iter_mut() {
        let mut acc = 0.0;
        for a in 0..kr {
            let r = (i as isize - a as isize).rem_euclid(rows as isize) as usize;
            for b in 0..kc {
                let c = (j as isize - b as isize).rem_euclid(cols as isize) as usize;
                acc += kernel[[a, b]] * data[[r, c]];
            }
        }
        *value = acc;
    }
    out
}

/// Summed high-pass response of the normalized data.
pub fn baseline_convolution(data: ArrayView2<'_, f64>, is_scalar: bool) -> Result<f64, ScoreError> {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return Err(ScoreError::EmptyEnsemble);
    }
    if is_scalar {
        return Err(ScoreError::RequiresSeries {
            measure: MEASURE,
            rows,
        });
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return Err(ScoreError::Degenerate {
            measure: MEASURE,
            reason: format!("value range is {range}"),
        });
    }

    let normalized = data.mapv(|v| (v - min) / range);
    let kernel = high_pass_kernel(rows, cols);
    let total = convolve_full_wrap(normalized.view(), kernel.view()).sum();

    if !total.is_finite() {
        return Err(ScoreError::NonFinite { measure: MEASURE });
    }
    Ok(total)
}
