//! Pairwise matrices.
//!
//! Hierarchical clustering consumes a [`CondensedMatrix`]: the strict upper
//! triangle of a symmetric `n x n` matrix stored row by row, using the same
//! index layout as scipy's `squareform`.

use crate::metric::Metric;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Fill cells `j >= i` of an `n x n` matrix with `metric(row_i, row_j)`.
///
/// Cells below the diagonal stay zero. Rows are computed in parallel.
pub fn upper_triangle(data: ArrayView2<'_, f64>, metric: Metric) -> Array2<f64> {
    let n = data.nrows();
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (i..n)
                .map(|j| metric.distance(data.row(i), data.row(j)))
                .collect()
        })
        .collect();

    let mut upper = Array2::zeros((n, n));
    for (i, row) in rows.into_iter().enumerate() {
        for (offset, value) in row.into_iter().enumerate() {
            upper[[i, i + offset]] = value;
        }
    }
    upper
}

/// Reflect an upper-triangle matrix into a symmetric condensed matrix.
///
/// Only the strict upper triangle survives; the diagonal is implicit zero.
pub fn euclidean_to_square(upper: &Array2<f64>) -> CondensedMatrix {
    CondensedMatrix::from_fn(upper.nrows(), |i, j| upper[[i, j]] + upper[[j, i]])
}

/// Turn an upper triangle of correlations into `1 - r` distances.
pub fn pearson_to_square(upper: &Array2<f64>) -> CondensedMatrix {
    CondensedMatrix::from_fn(upper.nrows(), |i, j| 1.0 - (upper[[i, j]] + upper[[j, i]]))
}

/// Symmetric zero-diagonal matrix in condensed (strict upper triangle) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondensedMatrix {
    n: usize,
    values: Vec<f64>,
}

impl CondensedMatrix {
    /// Build from a function evaluated on every pair `i < j`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                values.push(f(i, j));
            }
        }
        Self { n, values }
    }

    /// Number of points (side of the square matrix).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn index(&self, i: usize, j: usize) -> usize {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.n * i - i * (i + 1) / 2 + (j - i - 1)
    }

    /// Distance between points `i` and `j`; zero on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            0.0
        } else {
            self.values[self.index(i, j)]
        }
    }

    /// Overwrite the distance between `i != j`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.values[idx] = value;
    }

    /// Replace NaN with 0 and infinities with the largest finite values.
    pub fn sanitized(mut self) -> Self {
        for v in &mut self.values {
            if v.is_nan() {
                *v = 0.0;
            } else if *v == f64::INFINITY {
                *v = f64::MAX;
            } else if *v == f64::NEG_INFINITY {
                *v = f64::MIN;
            }
        }
        self
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
