//! Error types for sorting strategies.

use thiserror::Error;

/// All errors a strategy can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    /// The strategy needs 2-D data (one vector per row)
    #[error("{strategy} requires 2-D data, got {rows} scalar rows")]
    RequiresSeries { strategy: &'static str, rows: usize },

    /// Not enough rows for the algorithm
    #[error("{algorithm} needs at least {min} rows, got {rows}")]
    TooFewRows {
        algorithm: &'static str,
        min: usize,
        rows: usize,
    },

    /// The input carries no usable signal (all distances zero, no variance)
    #[error("Degenerate input: {0}")]
    Degenerate(String),

    /// Distances contain NaN or infinity
    #[error("Non-finite distance at condensed index {index}")]
    NonFiniteDistance { index: usize },

    /// A parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
