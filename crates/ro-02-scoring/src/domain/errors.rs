//! Error types for the scoring measures.

use shared_types::EnsembleError;
use thiserror::Error;

/// Failure of one measure on one dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// No rows to score
    #[error("Cannot score an empty ensemble")]
    EmptyEnsemble,

    /// The measure needs 2-D data (one vector per row)
    #[error("{measure} requires 2-D data, got {rows} scalar rows")]
    RequiresSeries { measure: &'static str, rows: usize },

    /// The data has no spread the measure can normalize by
    #[error("{measure} is undefined for this data: {reason}")]
    Degenerate {
        measure: &'static str,
        reason: String,
    },

    /// The measure produced NaN or infinity
    #[error("{measure} produced a non-finite value")]
    NonFinite { measure: &'static str },

    /// A parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The ordering cannot be applied to the ensemble
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(#[from] EnsembleError),
}
