//! Salient row ranges.

use super::quantile::quantile;
use ndarray::{Array2, ArrayView2, Axis};
use ro_01_distance_metrics::Metric;
use shared_types::InterestingnessSegment;

/// Summed dissimilarity of each row to the rows at most `offset` positions away.
///
/// Similarities are turned into `1 - s` first.
pub fn local_dissimilarity(data: ArrayView2<'_, f64>, metric: Metric, offset: usize) -> Vec<f64> {
    let n = data.nrows();
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(offset);
            let hi = (i + offset).min(n - 1);
            (lo..=hi)
                .filter(|&j| j != i)
                .map(|j| {
                    let d = metric.distance(data.row(i), data.row(j));
                    let d = if metric.is_similarity() { 1.0 - d } else { d };
                    if d.is_finite() {
                        d
                    } else {
                        0.0
                    }
                })
                .sum()
        })
        .collect()
}

/// Inclusive index ranges of the scores strictly above the `q`-quantile.
///
/// Surviving indices at most `gap_tolerance` apart share a range; a range of
/// one index is widened to a neighbour so that `start < end`.
pub fn salient_ranges(scores: &[f64], q: f64, gap_tolerance: usize) -> Vec<(usize, usize)> {
    let n = scores.len();
    if n < 2 {
        return Vec::new();
    }
    let threshold = quantile(scores, q);

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (i, _) in scores.iter().enumerate().filter(|(_, &s)| s > threshold) {
        match ranges.last_mut() {
            Some((_, end)) if i - *end <= gap_tolerance => *end = i,
            _ => ranges.push((i, i)),
        }
    }

    for (start, end) in &mut ranges {
        if start == end {
            if *end + 1 < n {
                *end += 1;
            } else {
                *start -= 1;
            }
        }
    }
    ranges
}

/// Column with the largest binarized response summed over `start..=end`.
///
/// Ties go to the first column.
pub fn representative_column(binary: &Array2<f64>, start: usize, end: usize) -> usize {
    let block = binary.slice(ndarray::s![start..=end, ..]);
    let sums = block.sum_axis(Axis(0));
    let mut best = 0;
    for (j, &v) in sums.iter().enumerate() {
        if v > sums[best] {
            best = j;
        }
    }
    best
}

/// Segments for `ranges`, each with its representative column.
pub fn to_segments(ranges: &[(usize, usize)], binary: &Array2<f64>) -> Vec<InterestingnessSegment> {
    ranges
        .iter()
        .map(|&(start, end)| InterestingnessSegment {
            start,
            end,
            representative: representative_column(binary, start, end),
        })
        .collect()
}
