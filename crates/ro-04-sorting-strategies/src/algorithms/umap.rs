//! # UMAP
//!
//! Uniform manifold approximation and projection with a seeded random
//! initial layout, so that every run over the same data yields the same
//! embedding.
//!
//! 1. Exact k-nearest neighbours (the point itself included)
//! 2. Per-point bandwidth by binary search so the fuzzy set cardinality is
//!    `log2(k)`
//! 3. Fuzzy union `a + b - ab` of the directed membership graph
//! 4. Stochastic gradient descent on the attractive/repulsive cross-entropy
//!    terms with negative sampling

use crate::config::StrategyConfig;
use crate::domain::errors::StrategyError;
use ndarray::{Array2, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

const SMOOTH_K_ITERATIONS: usize = 64;
const SMOOTH_K_TOLERANCE: f64 = 1e-5;
const MIN_K_DIST_SCALE: f64 = 1e-3;
const INIT_RANGE: f64 = 10.0;
const GRADIENT_CLIP: f64 = 4.0;
const MIN_ROWS: usize = 4;

/// Neighbour lists sorted by ascending distance.
struct KnnGraph {
    indices: Vec<Vec<usize>>,
    distances: Vec<Vec<f64>>,
}

/// One directed edge of the symmetrized graph.
struct Edge {
    head: usize,
    tail: usize,
    weight: f64,
}

fn squared_distance(data: &ArrayView2<'_, f64>, i: usize, j: usize) -> f64 {
    data.row(i)
        .iter()
        .zip(data.row(j).iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum()
}

fn nearest_neighbors(data: &ArrayView2<'_, f64>, k: usize) -> KnnGraph {
    let n = data.nrows();
    let rows: Vec<(Vec<usize>, Vec<f64>)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut candidates: Vec<(f64, usize)> = (0..n)
                .map(|j| {
                    let d = if i == j {
                        0.0
                    } else {
                        squared_distance(data, i, j).sqrt()
                    };
                    (d, j)
                })
                .collect();
            // self first among equal distances
            candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then((a.1 != i).cmp(&(b.1 != i))));
            candidates.truncate(k);
            candidates.into_iter().map(|(d, j)| (j, d)).unzip()
        })
        .collect();

    let (indices, distances) = rows.into_iter().unzip();
    KnnGraph {
        indices,
        distances,
    }
}

/// Per-point `(sigma, rho)`: bandwidth and distance to the nearest neighbour.
fn smooth_knn_dist(graph: &KnnGraph, k: usize) -> Vec<(f64, f64)> {
    let target = (k as f64).log2();
    let all_count: usize = graph.distances.iter().map(Vec::len).sum();
    let mean_all = graph.distances.iter().flatten().sum::<f64>() / all_count.max(1) as f64;

    graph
        .distances
        .iter()
        .map(|dists| {
            let rho = dists.iter().copied().find(|&d| d > 0.0).unwrap_or(0.0);

            let (mut lo, mut hi, mut mid) = (0.0, f64::INFINITY, 1.0);
            for _ in 0..SMOOTH_K_ITERATIONS {
                let psum: f64 = dists
                    .iter()
                    .skip(1)
                    .map(|&d| {
                        let gap = d - rho;
                        if gap > 0.0 {
                            (-gap / mid).exp()
                        } else {
                            1.0
                        }
                    })
                    .sum();
                if (psum - target).abs() < SMOOTH_K_TOLERANCE {
                    break;
                }
                if psum > target {
                    hi = mid;
                    mid = (lo + hi) / 2.0;
                } else {
                    lo = mid;
                    mid = if hi == f64::INFINITY {
                        mid * 2.0
                    } else {
                        (lo + hi) / 2.0
                    };
                }
            }

            let floor = if rho > 0.0 {
                MIN_K_DIST_SCALE * dists.iter().sum::<f64>() / dists.len() as f64
            } else {
                MIN_K_DIST_SCALE * mean_all
            };
            (mid.max(floor), rho)
        })
        .collect()
}

/// Symmetrized fuzzy graph as directed edges (both directions present).
fn fuzzy_graph(graph: &KnnGraph, bandwidths: &[(f64, f64)]) -> Vec<Edge> {
    let mut directed: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (i, (neighbors, dists)) in graph.indices.iter().zip(&graph.distances).enumerate() {
        let (sigma, rho) = bandwidths[i];
        for (&j, &d) in neighbors.iter().zip(dists) {
            if j == i {
                continue;
            }
            let strength = if d - rho <= 0.0 || sigma == 0.0 {
                1.0
            } else {
                (-(d - rho) / sigma).exp()
            };
            directed.insert((i, j), strength);
        }
    }

    let mut union: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (&(i, j), &p) in &directed {
        let q = directed.get(&(j, i)).copied().unwrap_or(0.0);
        let w = p + q - p * q;
        union.insert((i, j), w);
        union.insert((j, i), w);
    }

    union
        .into_iter()
        .filter(|&(_, w)| w > 0.0)
        .map(|((head, tail), weight)| Edge { head, tail, weight })
        .collect()
}

fn clip(g: f64) -> f64 {
    g.clamp(-GRADIENT_CLIP, GRADIENT_CLIP)
}

/// Embed the rows of `data` into `n_components` dimensions.
pub fn umap_embed(
    data: ArrayView2<'_, f64>,
    n_components: usize,
    config: &StrategyConfig,
) -> Result<Array2<f64>, StrategyError> {
    let n = data.nrows();
    if n < MIN_ROWS {
        return Err(StrategyError::TooFewRows {
            algorithm: "UMAP",
            min: MIN_ROWS,
            rows: n,
        });
    }
    if n_components == 0 || config.n_neighbors < 2 {
        return Err(StrategyError::InvalidParameter(format!(
            "UMAP needs n_components > 0 and n_neighbors > 1, got {} and {}",
            n_components, config.n_neighbors
        )));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(StrategyError::Degenerate("data contains non-finite values".to_string()));
    }

    let k = config.n_neighbors.min(n);
    let graph = nearest_neighbors(&data, k);
    let bandwidths = smooth_knn_dist(&graph, k);
    let mut edges = fuzzy_graph(&graph, &bandwidths);

    let n_epochs = config.epochs_for(n);
    let max_weight = edges.iter().map(|e| e.weight).fold(0.0, f64::max);
    if max_weight <= 0.0 {
        return Err(StrategyError::Degenerate("fuzzy graph has no edges".to_string()));
    }
    edges.retain(|e| e.weight >= max_weight / n_epochs as f64);

    let mut rng = StdRng::seed_from_u64(config.umap_seed);
    let mut embedding =
        Array2::from_shape_fn((n, n_components), |_| rng.gen_range(-INIT_RANGE..INIT_RANGE));

    optimize_layout(&mut embedding, &edges, max_weight, n_epochs, config, &mut rng);
    debug!(rows = n, n_components, edges = edges.len(), n_epochs, "UMAP embedding done");

    if embedding.iter().any(|v| !v.is_finite()) {
        return Err(StrategyError::Degenerate("embedding diverged".to_string()));
    }
    Ok(embedding)
}

fn optimize_layout(
    embedding: &mut Array2<f64>,
    edges: &[Edge],
    max_weight: f64,
    n_epochs: usize,
    config: &StrategyConfig,
    rng: &mut StdRng,
) {
    let (a, b) = (config.min_dist_a, config.min_dist_b);
    let n = embedding.nrows();
    let dim = embedding.ncols();
    let negative_rate = config.negative_sample_rate.max(1) as f64;

    let epochs_per_sample: Vec<f64> = edges.iter().map(|e| max_weight / e.weight).collect();
    let epochs_per_negative: Vec<f64> = epochs_per_sample.iter().map(|e| e / negative_rate).collect();
    let mut next_sample = epochs_per_sample.clone();
    let mut next_negative = epochs_per_negative.clone();

    for epoch in 0..n_epochs {
        let alpha = 1.0 - epoch as f64 / n_epochs as f64;
        let now = epoch as f64;

        for (e, edge) in edges.iter().enumerate() {
            if next_sample[e] > now {
                continue;
            }
            let (j, k) = (edge.head, edge.tail);

            let dist_sq: f64 = (0..dim)
                .map(|d| (embedding[[j, d]] - embedding[[k, d]]).powi(2))
                .sum();
            let attract = if dist_sq > 0.0 {
                -2.0 * a * b * dist_sq.powf(b - 1.0) / (a * dist_sq.powf(b) + 1.0)
            } else {
                0.0
            };
            for d in 0..dim {
                let grad = clip(attract * (embedding[[j, d]] - embedding[[k, d]]));
                embedding[[j, d]] += grad * alpha;
                embedding[[k, d]] -= grad * alpha;
            }
            next_sample[e] += epochs_per_sample[e];

            let n_negative = ((now - next_negative[e]) / epochs_per_negative[e]).max(0.0) as usize;
            for _ in 0..n_negative {
                let other = rng.gen_range(0..n);
                if other == j {
                    continue;
                }
                let dist_sq: f64 = (0..dim)
                    .map(|d| (embedding[[j, d]] - embedding[[other, d]]).powi(2))
                    .sum();
                let repel = if dist_sq > 0.0 {
                    2.0 * b / ((0.001 + dist_sq) * (a * dist_sq.powf(b) + 1.0))
                } else {
                    0.0
                };
                for d in 0..dim {
                    let grad = if repel > 0.0 {
                        clip(repel * (embedding[[j, d]] - embedding[[other, d]]))
                    } else {
                        GRADIENT_CLIP
                    };
                    embedding[[j, d]] += grad * alpha;
                }
            }
            next_negative[e] += n_negative as f64 * epochs_per_negative[e];
        }
    }
}
