//! Ensembles shared by the integration flows and benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared_types::{Ensemble, Permutation};

/// `n` sine rows of length `m` whose phase grows with the row index.
pub fn phase_ramp(n: usize, m: usize) -> Ensemble {
    let rows = (0..n)
        .map(|i| {
            let phase = i as f64 * std::f64::consts::PI / n as f64;
            (0..m).map(|t| (t as f64 * 0.25 + phase).sin()).collect()
        })
        .collect();
    Ensemble::from_rows(rows).unwrap_or_else(|e| panic!("fixture: {e}"))
}

/// Uniform noise in `[-1, 1)`.
pub fn noise(n: usize, m: usize, seed: u64) -> Ensemble {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n)
        .map(|_| (0..m).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect();
    Ensemble::from_rows(rows).unwrap_or_else(|e| panic!("fixture: {e}"))
}

/// A seeded random permutation of `0..n`.
pub fn shuffle(n: usize, seed: u64) -> Permutation {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    Permutation::try_new(order).unwrap_or_else(|e| panic!("fixture: {e}"))
}

/// Two blocks of sine rows with opposite sign, interleaved.
pub fn interleaved_classes(n: usize, m: usize) -> (Ensemble, Vec<bool>) {
    let mut labels = Vec::with_capacity(n);
    let rows = (0..n)
        .map(|i| {
            let positive = i % 2 == 0;
            labels.push(positive);
            let sign = if positive { 1.0 } else { -1.0 };
            let jitter = i as f64 * 0.01;
            (0..m).map(|t| sign * (t as f64 * 0.3).sin() + jitter).collect()
        })
        .collect();
    let data = Ensemble::from_rows(rows).unwrap_or_else(|e| panic!("fixture: {e}"));
    (data, labels)
}

/// A JSON input document with one stage of `n` rows.
pub fn input_document(dataset: &str, n: usize, m: usize) -> String {
    let raw = phase_ramp(n, m).reordered(&shuffle(n, 7)).unwrap_or_else(|e| panic!("fixture: {e}"));
    let labels: Vec<f64> = (0..n).map(|i| (i % 3) as f64).collect();
    serde_json::json!({
        "dataset": dataset,
        "test": {
            "raw_data": raw.to_rows(),
            "labels": labels,
            "attributions": { "Saliency": noise(n, m, 3).to_rows() }
        }
    })
    .to_string()
}
