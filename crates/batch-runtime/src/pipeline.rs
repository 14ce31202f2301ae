//! One batch run: input document to results document.

use crate::config::RuntimeConfig;
use anyhow::{Context, Result};
use ro_03_checkpoint_store::FileKVStore;
use ro_05_reordering::{
    DatasetInput, DatasetResults, ReorderingApi, ReorderingConfig, ReorderingService,
    SeriesResults, StageInput,
};
use ro_06_interestingness::InterestingnessDetector;
use shared_types::{Permutation, Stage, StrategyResult};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Run the whole batch described by `config`; returns the results path.
///
/// The results document is rewritten after every stage, so an interrupted
/// run keeps its finished stages.
pub fn run(config: &RuntimeConfig) -> Result<PathBuf> {
    let start = Instant::now();
    let input = DatasetInput::load(&config.input)
        .with_context(|| format!("loading input document {}", config.input.display()))?;
    let dataset = config.dataset.clone().unwrap_or_else(|| input.dataset.clone());
    info!(dataset = %dataset, input = %config.input.display(), "Starting batch");

    let store = FileKVStore::open(&config.checkpoint_dir).with_context(|| {
        format!("opening checkpoint store {}", config.checkpoint_dir.display())
    })?;
    let reordering = ReorderingConfig {
        dataset: dataset.clone(),
        parallel_series: config.parallel,
        ..ReorderingConfig::default()
    };
    let service = ReorderingService::new(reordering, store);
    let detector = InterestingnessDetector::default();

    let path = config.results_path(&dataset);
    let mut results = DatasetResults::load_or_new(&path, &dataset)
        .with_context(|| format!("loading results document {}", path.display()))?;
    if results.dataset != dataset {
        warn!(found = %results.dataset, expected = %dataset, "Results belong to another dataset, starting over");
        results = DatasetResults::new(dataset.as_str());
    }

    for (stage, stage_input) in input.stages() {
        let mut stage_results = service.reorder_stage(stage, stage_input, results.stage(stage));
        annotate_segments(&detector, stage, stage_input, &mut stage_results, &config.segment_strategy);
        results.stages.insert(stage, stage_results);
        results
            .save(&path)
            .with_context(|| format!("saving results document {}", path.display()))?;
        info!(stage = %stage, path = %path.display(), "Stage saved");
    }

    info!(dataset = %dataset, elapsed = ?start.elapsed(), "Batch finished");
    Ok(path)
}

/// Ordering used for the segments of a series: `preferred`, else `Base`.
pub fn segment_ordering<'a>(series: &'a SeriesResults, preferred: &str) -> Option<&'a Permutation> {
    series
        .result(preferred)
        .or_else(|| series.result(StrategyResult::BASE))
        .and_then(|r| r.ordering.as_ref())
}

/// Fill in the interestingness segments of series that have none yet.
fn annotate_segments(
    detector: &InterestingnessDetector,
    stage: Stage,
    input: &StageInput,
    series: &mut [SeriesResults],
    preferred: &str,
) {
    let data = match input.series() {
        Ok(data) => data,
        Err(e) => {
            warn!(stage = %stage, error = %e, "Derived series unavailable, skipping segments");
            return;
        }
    };

    for entry in series.iter_mut().filter(|s| s.segments.is_empty()) {
        let Some((_, ensemble)) = data.iter().find(|(kind, _)| *kind == entry.series) else {
            continue;
        };
        let Some(ordering) = segment_ordering(entry, preferred).cloned() else {
            continue;
        };
        match detector.detect(ensemble, &ordering) {
            Ok(segments) => entry.segments = segments,
            Err(e) => warn!(stage = %stage, series = %entry.series, error = %e, "Segment detection failed"),
        }
    }
}
