//! # Series, Stages and Strategy Families
//!
//! Tagged enumerations used as keys throughout the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which data series of a pipeline stage an ensemble came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesKind {
    RawData,
    Activations,
    Predictions,
    Labels,
    /// Output of one attribution technique (e.g. "Saliency").
    Attribution(String),
    /// Row-wise histogram derived from another series.
    Histogram(Box<SeriesKind>),
}

impl SeriesKind {
    pub fn histogram_of(base: SeriesKind) -> Self {
        SeriesKind::Histogram(Box::new(base))
    }

    /// Human readable name, e.g. "Raw Data" or "Saliency Histogram".
    pub fn display_name(&self) -> String {
        match self {
            SeriesKind::RawData => "Raw Data".to_string(),
            SeriesKind::Activations => "Activations".to_string(),
            SeriesKind::Predictions => "Predictions".to_string(),
            SeriesKind::Labels => "Labels".to_string(),
            SeriesKind::Attribution(name) => name.clone(),
            SeriesKind::Histogram(base) => format!("{} Histogram", base.display_name()),
        }
    }

    pub fn is_histogram(&self) -> bool {
        matches!(self, SeriesKind::Histogram(_))
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Pipeline stage (data split).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Train,
    Test,
    Validation,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Train, Stage::Test, Stage::Validation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Train => "train",
            Stage::Test => "test",
            Stage::Validation => "validation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family of sorting strategies; each family yields one or more orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyFamily {
    Naive,
    Feature,
    Projection,
    Clustering,
    ReducedClustering,
}

impl StrategyFamily {
    /// Families in the order the coordinator runs them.
    pub const ALL: [StrategyFamily; 5] = [
        StrategyFamily::Naive,
        StrategyFamily::Feature,
        StrategyFamily::Projection,
        StrategyFamily::Clustering,
        StrategyFamily::ReducedClustering,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            StrategyFamily::Naive => "naive",
            StrategyFamily::Feature => "feature",
            StrategyFamily::Projection => "projection",
            StrategyFamily::Clustering => "clustering",
            StrategyFamily::ReducedClustering => "reduced-clustering",
        }
    }
}

impl fmt::Display for StrategyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
