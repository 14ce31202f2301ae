//! # Input Document
//!
//! One JSON document per dataset, produced by the model/attribution pipeline:
//!
//! ```json
//! {
//!   "dataset": "ecg",
//!   "train": {
//!     "raw_data": [[0.1, 0.4], [0.2, 0.3]],
//!     "predictions": [1.0, 0.0],
//!     "attributions": { "Saliency": [[0.0, 1.0], [1.0, 0.0]] }
//!   }
//! }
//! ```
//!
//! Every ensemble is validated while parsing; stage-level invariants are
//! checked once by [`DatasetInput::from_json_str`].

use crate::domain::errors::InputError;
use ro_01_distance_metrics::histogram::histogram_counts;
use serde::{Deserialize, Serialize};
use shared_types::{Ensemble, EnsembleError, SeriesKind, Stage};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Rows must be longer than this to get a histogram series.
pub const HISTOGRAM_MIN_ROW_LEN: usize = 10;
/// A histogram series needs more rows than this to be kept.
pub const HISTOGRAM_MIN_ROWS: usize = 10;
/// Lower bound on histogram bins.
pub const HISTOGRAM_MIN_BINS: usize = 10;

/// Row-wise histograms of `data`, or `None` when the series does not qualify.
///
/// Each row is binned over its own range into `max(10, len / 10)` equal-width
/// bins.
pub fn row_histograms(data: &Ensemble) -> Result<Option<Ensemble>, EnsembleError> {
    if data.is_scalar()
        || data.n_cols() <= HISTOGRAM_MIN_ROW_LEN
        || data.n_rows() <= HISTOGRAM_MIN_ROWS
    {
        return Ok(None);
    }
    let bins = HISTOGRAM_MIN_BINS.max(data.n_cols() / 10);
    let rows = data
        .view()
        .rows()
        .into_iter()
        .map(|row| histogram_counts(row.iter().copied(), bins))
        .collect();
    Ensemble::from_rows(rows).map(Some)
}

/// Series of one pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageInput {
    pub raw_data: Ensemble,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activations: Option<Ensemble>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Ensemble>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Ensemble>,
    /// Attribution technique name to attribution values
    #[serde(default)]
    pub attributions: BTreeMap<String, Ensemble>,
}

impl StageInput {
    pub fn new(raw_data: Ensemble) -> Self {
        Self {
            raw_data,
            activations: None,
            predictions: None,
            labels: None,
            attributions: BTreeMap::new(),
        }
    }

    /// Number of samples (rows) shared by every series of the stage.
    pub fn n_rows(&self) -> usize {
        self.raw_data.n_rows()
    }

    /// Series given in the document, in a fixed order.
    pub fn base_series(&self) -> Vec<(SeriesKind, &Ensemble)> {
        let mut series = vec![(SeriesKind::RawData, &self.raw_data)];
        if let Some(a) = &self.activations {
            series.push((SeriesKind::Activations, a));
        }
        if let Some(p) = &self.predictions {
            series.push((SeriesKind::Predictions, p));
        }
        if let Some(l) = &self.labels {
            series.push((SeriesKind::Labels, l));
        }
        for (name, data) in &self.attributions {
            series.push((SeriesKind::Attribution(name.clone()), data));
        }
        series
    }

    /// Base series followed by the derived histogram series.
    pub fn series(&self) -> Result<Vec<(SeriesKind, Cow<'_, Ensemble>)>, EnsembleError> {
        let base = self.base_series();
        let mut histograms = Vec::new();
        for (kind, data) in &base {
            if let Some(histogram) = row_histograms(data)? {
                histograms.push((SeriesKind::histogram_of(kind.clone()), Cow::Owned(histogram)));
            }
        }

        let mut series: Vec<(SeriesKind, Cow<'_, Ensemble>)> = base
            .into_iter()
            .map(|(kind, data)| (kind, Cow::Borrowed(data)))
            .collect();
        series.extend(histograms);
        Ok(series)
    }

    fn validate(&self, stage: Stage) -> Result<(), InputError> {
        let expected = self.n_rows();
        let mut names = HashSet::new();
        for (kind, data) in self.base_series() {
            // histogram names are reserved whether or not the histogram is built
            for name in [kind.display_name(), SeriesKind::histogram_of(kind.clone()).display_name()] {
                if !names.insert(name.to_lowercase()) {
                    return Err(InputError::DuplicateSeriesName { stage, series: name });
                }
            }
            if let SeriesKind::Attribution(name) = &kind {
                if name.trim().is_empty() {
                    return Err(InputError::EmptyAttributionName { stage });
                }
            }
            if data.n_rows() != expected {
                return Err(InputError::RowCountMismatch {
                    stage,
                    series: kind.display_name(),
                    rows: data.n_rows(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// The whole input document of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInput {
    pub dataset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train: Option<StageInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<StageInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<StageInput>,
}

impl DatasetInput {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        let input: Self = serde_json::from_str(json).map_err(|e| InputError::Json(e.to_string()))?;
        input.validate()?;
        Ok(input)
    }

    /// Read, parse and validate the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| InputError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageInput> {
        match stage {
            Stage::Train => self.train.as_ref(),
            Stage::Test => self.test.as_ref(),
            Stage::Validation => self.validation.as_ref(),
        }
    }

    /// Stages present in the document, in pipeline order.
    pub fn stages(&self) -> Vec<(Stage, &StageInput)> {
        Stage::ALL
            .iter()
            .filter_map(|&stage| self.stage(stage).map(|input| (stage, input)))
            .collect()
    }

    /// Check dataset name, stage presence and per-stage row counts.
    pub fn validate(&self) -> Result<(), InputError> {
        let name = self.dataset.as_str();
        let usable = !name.is_empty()
            && !name.starts_with('.')
            && !name.chars().any(|c| c == '/' || c == '\\' || c.is_control());
        if !usable {
            return Err(InputError::InvalidDataset(self.dataset.clone()));
        }

        let stages = self.stages();
        if stages.is_empty() {
            return Err(InputError::NoStages(self.dataset.clone()));
        }
        for (stage, input) in stages {
            input.validate(stage)?;
        }
        Ok(())
    }
}
