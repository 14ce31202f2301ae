//! # Result Records
//!
//! Scores, strategy results and interestingness segments produced by the
//! engine and consumed by the visualization layer.

use crate::entities::Permutation;
use serde::{Deserialize, Serialize};

/// Block entropy of an ordering next to a randomly permuted baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyScore {
    /// Summed block entropy of the ordered ensemble.
    pub ordered: f64,
    /// Summed block entropy of a random permutation of the same rows.
    pub random: f64,
}

/// Quality measurement of one ordering.
///
/// `None` means the measure failed on this data; the failure is logged and
/// never aborts the batch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreTriple {
    pub neighborhood: Option<f64>,
    pub convolution: Option<f64>,
    pub entropy: Option<EntropyScore>,
}

impl ScoreTriple {
    /// True when every measure produced a value.
    pub fn is_complete(&self) -> bool {
        self.neighborhood.is_some() && self.convolution.is_some() && self.entropy.is_some()
    }
}

/// An ordering together with the name of the strategy that produced it.
///
/// This is the unit persisted in checkpoints; scores are recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOrdering {
    pub name: String,
    pub ordering: Permutation,
}

impl NamedOrdering {
    pub fn new(name: impl Into<String>, ordering: Permutation) -> Self {
        Self {
            name: name.into(),
            ordering,
        }
    }
}

/// One entry of a series' result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub name: String,
    pub score: ScoreTriple,
    pub ordering: Option<Permutation>,
}

impl StrategyResult {
    /// Name of the always-present result scored on the identity ordering.
    pub const BASE: &'static str = "Base";

    pub fn base(score: ScoreTriple, n: usize) -> Self {
        Self {
            name: Self::BASE.to_string(),
            score,
            ordering: Some(Permutation::identity(n)),
        }
    }

    pub fn scored(named: NamedOrdering, score: ScoreTriple) -> Self {
        Self {
            name: named.name,
            score,
            ordering: Some(named.ordering),
        }
    }
}

/// A contiguous, locally salient range of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestingnessSegment {
    /// First row position of the range (inclusive).
    pub start: usize,
    /// Last row position of the range (inclusive), always `> start`.
    pub end: usize,
    /// Column index with the strongest salient response inside the range.
    pub representative: usize,
}

impl InterestingnessSegment {
    /// True when `[start, end]` intersects `[lo, hi]`.
    pub fn overlaps(&self, lo: usize, hi: usize) -> bool {
        self.start <= hi && lo <= self.end
    }
}
