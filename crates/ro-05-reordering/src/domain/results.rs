//! # Results Document
//!
//! Per stage, per series: every scored ordering plus the interestingness
//! segments of the chosen ordering. Written as JSON for the visualization
//! layer.

use crate::domain::errors::ResultsError;
use serde::{Deserialize, Serialize};
use shared_types::{InterestingnessSegment, SeriesKind, Stage, StrategyResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Everything computed for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResults {
    pub series: SeriesKind,
    /// Display name of `series`
    pub name: String,
    /// `Base` first, then every family's orderings in run order
    pub results: Vec<StrategyResult>,
    #[serde(default)]
    pub segments: Vec<InterestingnessSegment>,
}

impl SeriesResults {
    pub fn new(series: SeriesKind, results: Vec<StrategyResult>) -> Self {
        Self {
            name: series.display_name(),
            series,
            results,
            segments: Vec::new(),
        }
    }

    /// Result named `name`, if that ordering was computed.
    pub fn result(&self, name: &str) -> Option<&StrategyResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

pub type StageResults = Vec<SeriesResults>;

/// The results document of one dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetResults {
    pub dataset: String,
    pub stages: BTreeMap<Stage, StageResults>,
}

impl DatasetResults {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            stages: BTreeMap::new(),
        }
    }

    pub fn stage(&self, stage: Stage) -> &[SeriesResults] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn series(&self, stage: Stage, kind: &SeriesKind) -> Option<&SeriesResults> {
        self.stage(stage).iter().find(|s| &s.series == kind)
    }

    pub fn contains(&self, stage: Stage, kind: &SeriesKind) -> bool {
        self.series(stage, kind).is_some()
    }

    /// Load the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResultsError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| ResultsError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load the document at `path`, or start an empty one if none exists.
    pub fn load_or_new(path: impl AsRef<Path>, dataset: &str) -> Result<Self, ResultsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new(dataset))
        }
    }

    /// Write the document to `path` via a temporary file and rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ResultsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let json = serde_json::to_vec_pretty(self).map_err(|e| ResultsError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(|e| io_error(&tmp, e))?;
        file.write_all(&json).map_err(|e| io_error(&tmp, e))?;
        file.sync_all().map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> ResultsError {
    ResultsError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{NamedOrdering, Permutation, ScoreTriple};

    fn sample() -> DatasetResults {
        let mut series = SeriesResults::new(
            SeriesKind::histogram_of(SeriesKind::Attribution("Saliency".to_string())),
            vec![
                StrategyResult::base(ScoreTriple::default(), 3),
                StrategyResult::scored(
                    NamedOrdering::new("Sorting", Permutation::try_new(vec![2, 1, 0]).unwrap()),
                    ScoreTriple {
                        neighborhood: Some(1.5),
                        ..ScoreTriple::default()
                    },
                ),
            ],
        );
        series.segments.push(InterestingnessSegment {
            start: 0,
            end: 2,
            representative: 1,
        });

        let mut results = DatasetResults::new("demo");
        results.stages.insert(Stage::Validation, vec![series]);
        results
    }

    #[test]
    fn test_lookup() {
        let results = sample();
        let kind = SeriesKind::histogram_of(SeriesKind::Attribution("Saliency".to_string()));
        assert!(results.contains(Stage::Validation, &kind));
        assert!(!results.contains(Stage::Train, &kind));

        let series = results.series(Stage::Validation, &kind).unwrap();
        assert_eq!(series.name, "Saliency Histogram");
        assert!(series.result("Sorting").is_some());
        assert!(series.result("UMAP").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("demo-results.json");

        let results = sample();
        results.save(&path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(DatasetResults::load(&path).unwrap(), results);

        let fresh = DatasetResults::load_or_new(dir.path().join("missing.json"), "demo").unwrap();
        assert!(fresh.stages.is_empty());
    }

    #[test]
    fn test_stage_keys_are_lowercase() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"validation\""));
    }
}
