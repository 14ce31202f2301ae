//! # Core Domain Entities
//!
//! - [`Ensemble`]: `n` rows of dimension `m` (rows = samples)
//! - [`Permutation`]: an ordering of the ensemble's rows

use crate::errors::EnsembleError;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENSEMBLE
// =============================================================================

/// Shape of the data the ensemble was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// One vector per row (2-D input).
    Series,
    /// One scalar per row (1-D input), stored as an `n x 1` matrix.
    Scalar,
}

/// An ordered collection of equally sized numeric rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EnsembleRepr", into = "EnsembleRepr")]
pub struct Ensemble {
    values: Array2<f64>,
    layout: Layout,
}

impl Ensemble {
    /// Build a 2-D ensemble from row vectors.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EnsembleError> {
        let n = rows.len();
        let m = rows.first().map(Vec::len).unwrap_or(0);
        if n == 0 || m == 0 {
            return Err(EnsembleError::Empty);
        }

        let mut flat = Vec::with_capacity(n * m);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != m {
                return Err(EnsembleError::RaggedRow {
                    row,
                    found: values.len(),
                    expected: m,
                });
            }
            flat.extend(values);
        }

        let values = Array2::from_shape_vec((n, m), flat).map_err(|_| EnsembleError::Empty)?;
        Ok(Self {
            values,
            layout: Layout::Series,
        })
    }

    /// Build a 1-D ensemble (one scalar per row).
    pub fn from_scalars(values: Vec<f64>) -> Result<Self, EnsembleError> {
        if values.is_empty() {
            return Err(EnsembleError::Empty);
        }
        let n = values.len();
        let values = Array2::from_shape_vec((n, 1), values).map_err(|_| EnsembleError::Empty)?;
        Ok(Self {
            values,
            layout: Layout::Scalar,
        })
    }

    /// Wrap an existing matrix as a 2-D ensemble.
    pub fn from_array(values: Array2<f64>) -> Result<Self, EnsembleError> {
        if values.nrows() == 0 || values.ncols() == 0 {
            return Err(EnsembleError::Empty);
        }
        Ok(Self {
            values: values.as_standard_layout().into_owned(),
            layout: Layout::Series,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_scalar(&self) -> bool {
        self.layout == Layout::Scalar
    }

    /// Read-only view of the underlying `n x m` matrix.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    /// Return a working copy whose rows follow `ordering`.
    pub fn reordered(&self, ordering: &Permutation) -> Result<Ensemble, EnsembleError> {
        if ordering.len() != self.n_rows() {
            return Err(EnsembleError::LengthMismatch {
                ordering: ordering.len(),
                rows: self.n_rows(),
            });
        }
        Ok(Self {
            values: self.values.select(Axis(0), ordering.as_slice()),
            layout: self.layout,
        })
    }

    /// Row vectors as plain `Vec`s (used for serialization).
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

/// Wire representation: either a flat list of scalars or a list of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum EnsembleRepr {
    Scalars(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

impl TryFrom<EnsembleRepr> for Ensemble {
    type Error = EnsembleError;

    fn try_from(repr: EnsembleRepr) -> Result<Self, Self::Error> {
        match repr {
            EnsembleRepr::Scalars(values) => Ensemble::from_scalars(values),
            EnsembleRepr::Rows(rows) => Ensemble::from_rows(rows),
        }
    }
}

impl From<Ensemble> for EnsembleRepr {
    fn from(ensemble: Ensemble) -> Self {
        match ensemble.layout {
            Layout::Scalar => EnsembleRepr::Scalars(ensemble.values.iter().copied().collect()),
            Layout::Series => EnsembleRepr::Rows(ensemble.to_rows()),
        }
    }
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// A reordering of `n` rows: contains every index in `0..n` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The ordering that leaves rows where they are.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Validate `values` as a permutation of `0..values.len()`.
    pub fn try_new(values: Vec<usize>) -> Result<Self, EnsembleError> {
        let len = values.len();
        let mut seen = vec![false; len];
        for &v in &values {
            if v >= len {
                return Err(EnsembleError::NotAPermutation {
                    len,
                    reason: format!("index {v} out of range"),
                });
            }
            if std::mem::replace(&mut seen[v], true) {
                return Err(EnsembleError::NotAPermutation {
                    len,
                    reason: format!("index {v} appears twice"),
                });
            }
        }
        Ok(Self(values))
    }

    /// Stable ascending argsort; NaN values sort last.
    pub fn argsort(values: &[f64]) -> Self {
        let mut indices: Vec<usize> = (0..values.len()).collect();
        indices.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        Self(indices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// True when this ordering can be applied to an ensemble of `n` rows.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        self.0.len() == n
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = EnsembleError;

    fn try_from(values: Vec<usize>) -> Result<Self, Self::Error> {
        Permutation::try_new(values)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.0
    }
}
