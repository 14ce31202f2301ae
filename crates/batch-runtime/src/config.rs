//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default ordering used for interestingness segments.
pub const DEFAULT_SEGMENT_STRATEGY: &str = "Ward Normalized Euclidean";

/// Batch runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Input document
    pub input: PathBuf,
    /// Overrides the dataset name of the input document
    pub dataset: Option<String>,
    /// Directory of `<dataset>-results.json`
    pub results_dir: PathBuf,
    /// Directory of the checkpoint files
    pub checkpoint_dir: PathBuf,
    /// Reorder the series of a stage concurrently
    pub parallel: bool,
    /// Ordering whose interestingness segments are reported
    pub segment_strategy: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.json"),
            dataset: None,
            results_dir: PathBuf::from("results"),
            checkpoint_dir: PathBuf::from("checkpoints"),
            parallel: false,
            segment_strategy: DEFAULT_SEGMENT_STRATEGY.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RO_INPUT`: Input document (default: input.json)
    /// - `RO_DATASET`: Dataset name override (default: taken from the input)
    /// - `RO_RESULTS_DIR`: Results directory (default: results)
    /// - `RO_CHECKPOINT_DIR`: Checkpoint directory (default: checkpoints)
    /// - `RO_PARALLEL`: Reorder series concurrently (default: false)
    /// - `RO_SEGMENT_STRATEGY`: Ordering used for segments (default: Ward Normalized Euclidean)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup("RO_INPUT").map(PathBuf::from).unwrap_or(defaults.input),
            dataset: lookup("RO_DATASET").filter(|d| !d.is_empty()),
            results_dir: lookup("RO_RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.results_dir),
            checkpoint_dir: lookup("RO_CHECKPOINT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.checkpoint_dir),
            parallel: lookup("RO_PARALLEL")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.parallel),
            segment_strategy: lookup("RO_SEGMENT_STRATEGY")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.segment_strategy),
        }
    }

    /// `<results_dir>/<dataset>-results.json`
    pub fn results_path(&self, dataset: &str) -> PathBuf {
        self.results_dir.join(format!("{dataset}-results.json"))
    }
}
