//! Checkpoint keys.

use shared_types::{SeriesKind, Stage, StrategyFamily};
use std::fmt;

/// Identifies the orderings of one strategy family for one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckpointKey {
    pub dataset: String,
    pub stage: Stage,
    pub series: SeriesKind,
    pub family: StrategyFamily,
}

impl CheckpointKey {
    pub fn new(
        dataset: impl Into<String>,
        stage: Stage,
        series: SeriesKind,
        family: StrategyFamily,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            stage,
            series,
            family,
        }
    }

    /// Storage key: `{dataset}-{stage}-{series}-{family}`.
    ///
    /// Dataset and attribution names are escaped so that no component can
    /// contain `-` or `~`, and series variants are tagged; distinct keys
    /// therefore never share a record, also on case-insensitive filesystems.
    pub fn storage_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            escape(&self.dataset),
            self.stage.as_str(),
            series_token(&self.series),
            self.family.slug()
        )
    }
}

/// Keep `[a-z0-9_]`, percent-encode every other byte.
fn escape(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for byte in component.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn series_token(series: &SeriesKind) -> String {
    match series {
        SeriesKind::RawData => "raw".to_string(),
        SeriesKind::Activations => "act".to_string(),
        SeriesKind::Predictions => "pred".to_string(),
        SeriesKind::Labels => "labels".to_string(),
        SeriesKind::Attribution(name) => format!("attr~{}", escape(name)),
        SeriesKind::Histogram(base) => format!("hist~{}", series_token(base)),
    }
}

impl fmt::Display for CheckpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
