//! Row preprocessing before smoothing.

use super::quantile::quantile;
use ndarray::{Array2, ArrayView2, ArrayViewMut1, Axis};

/// Scale every row to `[0, 1]`; constant rows become zeros.
pub fn minmax_rows(data: ArrayView2<'_, f64>) -> Array2<f64> {
    let mut out = data.to_owned();
    for mut row in out.axis_iter_mut(Axis(0)) {
        let (lo, hi) = row
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let range = hi - lo;
        if range > 0.0 && range.is_finite() {
            row.mapv_inplace(|v| (v - lo) / range);
        } else {
            row.fill(0.0);
        }
    }
    out
}

/// Replace values strictly inside the `[q, 1 - q]` quantile band of the row
/// with half the row's range.
pub fn suppress_central(mut row: ArrayViewMut1<'_, f64>, q: f64) {
    let values = row.to_vec();
    let lower = quantile(&values, q);
    let upper = quantile(&values, 1.0 - q);
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let fill = (hi - lo) / 2.0;
    row.mapv_inplace(|v| if v > lower && v < upper { fill } else { v });
}

/// Fold the row onto the upper side of its mean: `mean + |x - mean|`.
pub fn reflect(mut row: ArrayViewMut1<'_, f64>) {
    let Some(mean) = row.mean() else {
        return;
    };
    row.mapv_inplace(|v| mean + (v - mean).abs());
}

/// Normalize, flatten the central band and reflect every row.
pub fn emphasize_extremes(normalized: &Array2<f64>, q: f64) -> Array2<f64> {
    let mut out = normalized.clone();
    for mut row in out.axis_iter_mut(Axis(0)) {
        suppress_central(row.view_mut(), q);
        reflect(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_minmax_rows() {
        let data = array![[2.0, 4.0, 6.0], [5.0, 5.0, 5.0]];
        let out = minmax_rows(data.view());
        assert_eq!(out, array![[0.0, 0.5, 1.0], [0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_central_band_is_flattened() {
        let mut row = array![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
        suppress_central(row.view_mut(), 0.1);
        // band is (0.1, 0.9), fill is 0.5
        assert_eq!(row[0], 0.0);
        assert_eq!(row[1], 0.1);
        assert_eq!(row[9], 0.9);
        assert_eq!(row[10], 1.0);
        assert!(row.iter().skip(2).take(7).all(|&v| v == 0.5));
    }

    #[test]
    fn test_reflect_keeps_mean_as_floor() {
        let mut row = array![0.0, 1.0, 2.0];
        reflect(row.view_mut());
        assert_eq!(row, array![2.0, 1.0, 2.0]);
    }
}
