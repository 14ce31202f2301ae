//! Error types for interestingness detection.

use shared_types::EnsembleError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterestingnessError {
    /// The ordering does not fit the ensemble
    #[error("Invalid ordering: {0}")]
    Ordering(#[from] EnsembleError),

    /// Fewer than two rows
    #[error("Interestingness needs at least 2 rows, got {rows}")]
    TooFewRows { rows: usize },

    /// A configuration value is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
