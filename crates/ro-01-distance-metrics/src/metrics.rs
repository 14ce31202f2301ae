//! Pairwise metric functions.
//!
//! Every function takes two equal-length vectors. Distances return `0` for
//! identical inputs; correlation metrics return `NaN` when a vector is
//! constant, which callers treat as "no information".

use crate::histogram::histogram_counts;
use ndarray::ArrayView1;

/// Guard used by [`normalized_euclidean`] against division by a zero maximum.
pub const NORMALIZATION_EPSILON: f64 = 0.001;

fn mean(a: ArrayView1<'_, f64>) -> f64 {
    a.sum() / a.len() as f64
}

fn max_value(a: ArrayView1<'_, f64>) -> f64 {
    a.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Zero mean, unit (population) variance. A constant vector maps to zeros.
pub fn standardize(a: ArrayView1<'_, f64>) -> Vec<f64> {
    let m = mean(a);
    let std = (a.iter().map(|x| (x - m).powi(2)).sum::<f64>() / a.len() as f64).sqrt();
    if std == 0.0 || !std.is_finite() {
        return vec![0.0; a.len()];
    }
    a.iter().map(|x| (x - m) / std).collect()
}

fn sq_dist<'a>(a: impl Iterator<Item = &'a f64>, b: impl Iterator<Item = &'a f64>) -> f64 {
    a.zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

pub fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    sq_dist(a.iter(), b.iter()).sqrt()
}

/// Euclidean distance after scaling each vector by its own maximum, divided
/// by the vector length.
pub fn normalized_euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let sa = max_value(a) + NORMALIZATION_EPSILON;
    let sb = max_value(b) + NORMALIZATION_EPSILON;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x / sa - y / sb).powi(2))
        .sum();
    sum.sqrt() / a.len() as f64
}

pub fn z_normalized_euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let za = standardize(a);
    let zb = standardize(b);
    sq_dist(za.iter(), zb.iter()).sqrt()
}

/// Pearson correlation coefficient (similarity, in `[-1, 1]`).
pub fn pearson(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let ma = mean(a);
    let mb = mean(b);
    let (mut cov, mut va, mut vb) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - ma;
        let dy = y - mb;
        cov += dx * dy;
        va += dx * dx;
        vb += dy * dy;
    }
    let denom = (va * vb).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// 1-based ranks with ties sharing their average rank.
pub fn average_ranks(a: ArrayView1<'_, f64>) -> Vec<f64> {
    let values: Vec<f64> = a.to_vec();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end share ranks start+1..=end
        let rank = (start + end + 1) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}

/// Spearman rank correlation (similarity).
pub fn spearman(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let ra = average_ranks(a);
    let rb = average_ranks(b);
    pearson(ArrayView1::from(ra.as_slice()), ArrayView1::from(rb.as_slice()))
}

pub fn cosine(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let dot = a.dot(&b);
    let na = a.dot(&a).sqrt();
    let nb = b.dot(&b).sqrt();
    1.0 - dot / (na * nb)
}

fn relative_entropy(p: &[f64], m: &[f64]) -> f64 {
    p.iter()
        .zip(m)
        .map(|(&pi, &mi)| if pi > 0.0 { pi * (pi / mi).ln() } else { 0.0 })
        .sum()
}

/// Jensen-Shannon distance (natural log) between two unnormalized histograms.
pub fn jensen_shannon(p: &[f64], q: &[f64]) -> f64 {
    let sp: f64 = p.iter().sum();
    let sq: f64 = q.iter().sum();
    let p: Vec<f64> = p.iter().map(|v| v / sp).collect();
    let q: Vec<f64> = q.iter().map(|v| v / sq).collect();
    let m: Vec<f64> = p.iter().zip(&q).map(|(a, b)| (a + b) / 2.0).collect();
    let divergence = 0.5 * (relative_entropy(&p, &m) + relative_entropy(&q, &m));
    divergence.max(0.0).sqrt()
}

/// Histogram-based similarity: `sqrt(1 - JS(pdf_a, pdf_b))` with
/// `0.1 * len` bins per vector.
pub fn bhattacharyya_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let bins = ((a.len().max(b.len()) as f64 * 0.1) as usize).max(1);
    let pdf_a = histogram_counts(a.iter().copied(), bins);
    let pdf_b = histogram_counts(b.iter().copied(), bins);
    (1.0 - jensen_shannon(&pdf_a, &pdf_b)).sqrt()
}

/// First Wasserstein distance between the empirical distributions of the
/// two value sets.
pub fn wasserstein(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let mut sa = a.to_vec();
    let mut sb = b.to_vec();
    sa.sort_by(f64::total_cmp);
    sb.sort_by(f64::total_cmp);

    let mut all: Vec<f64> = sa.iter().chain(sb.iter()).copied().collect();
    all.sort_by(f64::total_cmp);

    let (na, nb) = (sa.len() as f64, sb.len() as f64);
    all.windows(2)
        .map(|w| {
            let t = w[0];
            let cdf_a = sa.partition_point(|&x| x <= t) as f64 / na;
            let cdf_b = sb.partition_point(|&x| x <= t) as f64 / nb;
            (cdf_a - cdf_b).abs() * (w[1] - w[0])
        })
        .sum()
}

/// DTW with squared point cost; returns the square root of the path cost.
pub fn dynamic_time_warping(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let m = b.len();
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for &x in a.iter() {
        curr[0] = f64::INFINITY;
        for (j, &y) in b.iter().enumerate() {
            let best = prev[j].min(prev[j + 1]).min(curr[j]);
            curr[j + 1] = (x - y).powi(2) + best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m].sqrt()
}

/// Discrete Fréchet distance between `(a_i, 0)` and `(b_j, 0)` trajectories.
pub fn frechet_dist(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let m = b.len();
    if a.is_empty() || m == 0 {
        return f64::NAN;
    }
    let mut prev = vec![0.0f64; m];
    let mut curr = vec![0.0f64; m];

    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            let d = (x - y).abs();
            curr[j] = match (i, j) {
                (0, 0) => d,
                (0, _) => curr[j - 1].max(d),
                (_, 0) => prev[0].max(d),
                _ => prev[j].min(prev[j - 1]).min(curr[j - 1]).max(d),
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m - 1]
}

pub fn manhattan(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Hellinger-style distance `Σ (√p − √q)² / √2`; negative entries count as 0.
pub fn hellinger(p: ArrayView1<'_, f64>, q: ArrayView1<'_, f64>) -> f64 {
    p.iter()
        .zip(q.iter())
        .map(|(x, y)| (x.max(0.0).sqrt() - y.max(0.0).sqrt()).powi(2))
        .sum::<f64>()
        / std::f64::consts::SQRT_2
}
