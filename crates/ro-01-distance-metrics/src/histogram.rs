//! Equal-width histograms with numpy's edge conventions.
//!
//! Bins are half-open `[lo, hi)` except the last, which includes `hi`.
//! A degenerate range (`lo == hi`) is widened to `[lo - 0.5, hi + 0.5]`.

/// Count values into `bins` equal-width bins spanning `[min, max]` of `values`.
pub fn histogram_counts<I>(values: I, bins: usize) -> Vec<f64>
where
    I: IntoIterator<Item = f64> + Clone,
{
    let (lo, hi) = values
        .clone()
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return vec![0.0; bins.max(1)];
    }
    histogram_counts_in_range(values, bins, lo, hi)
}

/// Count values into `bins` equal-width bins spanning `[lo, hi]`.
///
/// Values outside the range (and non-finite values) are ignored.
pub fn histogram_counts_in_range<I>(values: I, bins: usize, lo: f64, hi: f64) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let bins = bins.max(1);
    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    let width = hi - lo;

    let mut counts = vec![0.0; bins];
    for v in values {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1.0;
    }
    counts
}
