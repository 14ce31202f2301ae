//! Error types for the reordering documents.

use shared_types::{EnsembleError, Stage};
use thiserror::Error;

/// Input document errors. Any of these aborts the run before computation.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The document is not valid JSON for the input schema
    #[error("Malformed input document: {0}")]
    Json(String),

    /// Dataset name is empty or not usable in checkpoint keys
    #[error("Invalid dataset name {0:?}")]
    InvalidDataset(String),

    /// No stage carries data
    #[error("Dataset {0} has no stages")]
    NoStages(String),

    /// A series has a different row count than the stage's raw data
    #[error("{stage} series {series} has {rows} rows, raw data has {expected}")]
    RowCountMismatch {
        stage: Stage,
        series: String,
        rows: usize,
        expected: usize,
    },

    /// An attribution name is empty
    #[error("{stage} has an attribution with an empty name")]
    EmptyAttributionName { stage: Stage },

    /// Two series of a stage would share a display name
    #[error("{stage} has more than one series named {series:?}")]
    DuplicateSeriesName { stage: Stage, series: String },

    /// A derived series could not be built
    #[error("{stage} series {series}: {source}")]
    Series {
        stage: Stage,
        series: String,
        #[source]
        source: EnsembleError,
    },
}

/// Results document errors.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// Reading or writing the document failed
    #[error("Results I/O error at {path}: {message}")]
    Io { path: String, message: String },

    /// The document is not valid results JSON
    #[error("Malformed results document {path}: {message}")]
    Json { path: String, message: String },
}
