//! # Error Types
//!
//! Construction errors for the shared domain types.

use thiserror::Error;

/// Errors raised while building an [`crate::Ensemble`] or [`crate::Permutation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnsembleError {
    /// The ensemble has no rows (or rows without values).
    #[error("Ensemble is empty")]
    Empty,

    /// Rows do not share the same dimension.
    #[error("Ragged ensemble: row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// An ordering does not contain every index exactly once.
    #[error("Not a permutation of 0..{len}: {reason}")]
    NotAPermutation { len: usize, reason: String },

    /// An ordering was applied to an ensemble of a different size.
    #[error("Ordering length {ordering} does not match ensemble size {rows}")]
    LengthMismatch { ordering: usize, rows: usize },
}
