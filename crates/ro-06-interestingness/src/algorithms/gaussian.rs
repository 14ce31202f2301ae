//! Gaussian smoothing and binarization.

use super::quantile::quantile;
use ndarray::{Array2, ArrayView2};

/// Normalized `size x size` Gaussian kernel with `sigma = size / 4`.
pub fn gaussian_kernel(size: usize) -> Array2<f64> {
    let sigma = size as f64 / 4.0;
    let center = (size / 2) as f64;
    let mut kernel = Array2::from_shape_fn((size, size), |(i, j)| {
        let di = i as f64 - center;
        let dj = j as f64 - center;
        (-(di * di + dj * dj) / (2.0 * sigma * sigma)).exp()
    });
    let total = kernel.sum();
    if total > 0.0 {
        kernel.mapv_inplace(|v| v / total);
    }
    kernel
}

/// 2-D convolution with zero padding; output has the shape of `data`.
pub fn convolve_same(data: ArrayView2<'_, f64>, kernel: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = data.dim();
    let (kr, kc) = kernel.dim();
    let (cr, cc) = ((kr / 2) as isize, (kc / 2) as isize);

    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let mut acc = 0.0;
        for a in 0..kr {
            let rr = r as isize + a as isize - cr;
            if rr < 0 || rr >= rows as isize {
                continue;
            }
            for b in 0..kc {
                let cc2 = c as isize + b as isize - cc;
                if cc2 < 0 || cc2 >= cols as isize {
                    continue;
                }
                acc += data[[rr as usize, cc2 as usize]] * kernel[[kr - 1 - a, kc - 1 - b]];
            }
        }
        acc
    })
}

/// 1 where the value is strictly above the `q`-quantile of all values, else 0.
pub fn binarize(data: &Array2<f64>, q: f64) -> Array2<f64> {
    let values: Vec<f64> = data.iter().copied().collect();
    let threshold = quantile(&values, q);
    data.mapv(|v| if v > threshold { 1.0 } else { 0.0 })
}
