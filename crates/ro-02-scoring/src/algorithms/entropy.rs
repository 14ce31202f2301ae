//! Block entropy score.
//!
//! Rows are cut into contiguous blocks of `2 * nb`. Each block's values are
//! discretized against `bins + 1` equally spaced edges spanning the block and
//! the Shannon entropy of the bucket frequencies summed over blocks. The same
//! sum over a random permutation of the rows is returned as a baseline.

use crate::domain::errors::ScoreError;
use ndarray::{ArrayView2, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use shared_types::EntropyScore;
use std::collections::HashMap;

const MEASURE: &str = "Entropy score";

/// Bucket index of `value`: the number of edges `<= value`.
fn digitize(value: f64, edges: &[f64]) -> usize {
    edges.partition_point(|&e| e <= value)
}

/// Shannon entropy (natural log) of the discretized block.
fn block_entropy(block: ArrayView2<'_, f64>, bins: usize) -> f64 {
    let min = block.iter().copied().fold(f64::INFINITY, f64::min);
    let max = block.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|k| if k == bins { max } else { min + step * k as f64 })
        .collect();

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &v in block.iter() {
        *counts.entry(digitize(v, &edges)).or_default() += 1;
    }

    let total = block.len() as f64;
    -counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            p * p.ln()
        })
        .sum::<f64>()
}

fn summed_entropy(data: ArrayView2<'_, f64>, block_rows: usize, bins: usize) -> f64 {
    data.axis_chunks_iter(Axis(0), block_rows)
        .map(|block| block_entropy(block, bins))
        .sum()
}

/// Summed block entropy of `data` and of a seeded random permutation of it.
pub fn baseline_entropy(
    data: ArrayView2<'_, f64>,
    neighborhood: usize,
    bins: usize,
    rng: &mut StdRng,
) -> Result<EntropyScore, ScoreError> {
    let n = data.nrows();
    if n == 0 || data.ncols() == 0 {
        return Err(ScoreError::EmptyEnsemble);
    }
    if neighborhood == 0 || bins == 0 {
        return Err(ScoreError::InvalidParameter(format!(
            "entropy needs neighborhood > 0 and bins > 0, got {neighborhood} and {bins}"
        )));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(ScoreError::NonFinite { measure: MEASURE });
    }

    let block_rows = 2 * neighborhood;
    let mut random_rows: Vec<usize> = (0..n).collect();
    random_rows.shuffle(rng);
    let random = data.select(Axis(0), &random_rows);

    Ok(EntropyScore {
        ordered: summed_entropy(data, block_rows, bins),
        random: summed_entropy(random.view(), block_rows, bins),
    })
}

/// Entropy RNG for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
