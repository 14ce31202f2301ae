//! # Agglomerative Linkage
//!
//! Nearest-neighbour chain clustering over a condensed distance matrix with
//! Lance–Williams distance updates. All four supported methods are
//! reducible, so the chain algorithm yields the same hierarchy as the naive
//! `O(n³)` procedure.
//!
//! Merges are reported like scipy's linkage matrix: sorted by distance,
//! clusters `0..n` are the input points and merge `k` creates cluster `n + k`.

use crate::domain::errors::StrategyError;
use ro_01_distance_metrics::CondensedMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inter-cluster distance update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Linkage {
    Ward,
    Single,
    Average,
    Complete,
}

impl Linkage {
    pub const ALL: [Linkage; 4] = [
        Linkage::Ward,
        Linkage::Single,
        Linkage::Average,
        Linkage::Complete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Linkage::Ward => "Ward",
            Linkage::Single => "Single",
            Linkage::Average => "Average",
            Linkage::Complete => "Complete",
        }
    }

    /// Distance from cluster `i` to the union of `x` and `y`.
    fn update(&self, d_xi: f64, d_yi: f64, d_xy: f64, nx: f64, ny: f64, ni: f64) -> f64 {
        match self {
            Linkage::Single => d_xi.min(d_yi),
            Linkage::Complete => d_xi.max(d_yi),
            Linkage::Average => (nx * d_xi + ny * d_yi) / (nx + ny),
            Linkage::Ward => {
                let t = 1.0 / (nx + ny + ni);
                let v = (ni + nx) * t * d_xi * d_xi + (ni + ny) * t * d_yi * d_yi
                    - ni * t * d_xy * d_xy;
                v.max(0.0).sqrt()
            }
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the linkage matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// Smaller cluster id of the pair
    pub left: usize,
    /// Larger cluster id of the pair
    pub right: usize,
    pub distance: f64,
    /// Number of points in the merged cluster
    pub size: usize,
}

/// Hierarchical clustering of the `n` points of `distances`.
pub fn linkage(distances: &CondensedMatrix, method: Linkage) -> Result<Vec<Merge>, StrategyError> {
    if let Some(index) = distances.values().iter().position(|v| !v.is_finite()) {
        return Err(StrategyError::NonFiniteDistance { index });
    }
    let n = distances.n();
    if n < 2 {
        return Ok(Vec::new());
    }

    let raw = nn_chain(distances.clone(), n, method);
    Ok(relabel(raw, n))
}

/// Unsorted merges between point indices (the merged cluster keeps the
/// larger index as its representative).
fn nn_chain(mut d: CondensedMatrix, n: usize, method: Linkage) -> Vec<Merge> {
    let mut size = vec![1usize; n];
    let mut chain: Vec<usize> = Vec::with_capacity(n);
    let mut merges = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        if chain.is_empty() {
            if let Some(first) = (0..n).find(|&i| size[i] > 0) {
                chain.push(first);
            }
        }

        let (x, y, current_min) = loop {
            let x = chain[chain.len() - 1];
            let (mut y, mut current_min) = if chain.len() > 1 {
                let y = chain[chain.len() - 2];
                (y, d.get(x, y))
            } else {
                (x, f64::INFINITY)
            };

            for i in 0..n {
                if size[i] == 0 || i == x {
                    continue;
                }
                let dist = d.get(x, i);
                if dist < current_min {
                    current_min = dist;
                    y = i;
                }
            }

            if chain.len() > 1 && y == chain[chain.len() - 2] {
                break (x, y, current_min);
            }
            chain.push(y);
        };

        chain.truncate(chain.len() - 2);

        let (x, y) = if x > y { (y, x) } else { (x, y) };
        let (nx, ny) = (size[x], size[y]);
        merges.push(Merge {
            left: x,
            right: y,
            distance: current_min,
            size: nx + ny,
        });
        size[x] = 0;
        size[y] = nx + ny;

        for i in 0..n {
            let ni = size[i];
            if ni == 0 || i == y {
                continue;
            }
            let updated = method.update(
                d.get(i, x),
                d.get(i, y),
                current_min,
                nx as f64,
                ny as f64,
                ni as f64,
            );
            d.set(i, y, updated);
        }
    }

    merges
}

/// Sort merges by distance (stable) and rename clusters scipy-style.
fn relabel(mut merges: Vec<Merge>, n: usize) -> Vec<Merge> {
    merges.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut parent: Vec<usize> = (0..2 * n - 1).collect();
    let mut sizes = vec![1usize; 2 * n - 1];
    let mut next_label = n;

    let find = |parent: &mut Vec<usize>, mut x: usize| -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        while parent[x] != root {
            let next = parent[x];
            parent[x] = root;
            x = next;
        }
        root
    };

    for merge in &mut merges {
        let a = find(&mut parent, merge.left);
        let b = find(&mut parent, merge.right);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        parent[lo] = next_label;
        parent[hi] = next_label;
        sizes[next_label] = sizes[lo] + sizes[hi];

        merge.left = lo;
        merge.right = hi;
        merge.size = sizes[next_label];
        next_label += 1;
    }

    merges
}
