//! # Reordering Service
//!
//! For each family the service first asks the checkpoint store. A stored
//! record is reused only if every ordering is still a permutation of the
//! current row count; otherwise it is discarded with a warning and the family
//! is recomputed. Fresh orderings are persisted before they are scored.

use crate::config::ReorderingConfig;
use crate::domain::input::{DatasetInput, StageInput};
use crate::domain::results::{DatasetResults, SeriesResults, StageResults};
use crate::ports::inbound::ReorderingApi;
use rayon::prelude::*;
use ro_02_scoring::ScoringEngine;
use ro_03_checkpoint_store::{CheckpointKey, CheckpointStore, KeyValueStore};
use ro_04_sorting_strategies::{SortingStrategy, StrategyCatalog};
use shared_types::{Ensemble, NamedOrdering, ScoreTriple, SeriesKind, Stage, StrategyResult};
use std::borrow::Cow;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Reordering coordinator over a checkpoint store `S`.
pub struct ReorderingService<S: KeyValueStore> {
    config: ReorderingConfig,
    engine: ScoringEngine,
    catalog: StrategyCatalog,
    checkpoints: CheckpointStore<S>,
}

impl<S: KeyValueStore> ReorderingService<S> {
    pub fn new(config: ReorderingConfig, store: S) -> Self {
        let catalog = StrategyCatalog::new(config.strategies.clone());
        Self::with_catalog(config, store, catalog)
    }

    /// Use a custom strategy catalog.
    pub fn with_catalog(config: ReorderingConfig, store: S, catalog: StrategyCatalog) -> Self {
        Self {
            engine: ScoringEngine::with_config(config.scoring.clone()),
            catalog,
            checkpoints: CheckpointStore::new(store),
            config,
        }
    }

    pub fn config(&self) -> &ReorderingConfig {
        &self.config
    }

    pub fn checkpoints(&self) -> &CheckpointStore<S> {
        &self.checkpoints
    }

    /// Orderings of one family, from the checkpoint or freshly computed.
    ///
    /// `None` when the strategy rejects the data.
    fn family_orderings(
        &self,
        stage: Stage,
        kind: &SeriesKind,
        data: &Ensemble,
        strategy: &dyn SortingStrategy,
    ) -> Option<Vec<NamedOrdering>> {
        let n = data.n_rows();
        let key = CheckpointKey::new(self.config.dataset.as_str(), stage, kind.clone(), strategy.family());

        let mut persist = true;
        match self.checkpoints.check::<Vec<NamedOrdering>>(&key) {
            Ok(Some(stored)) if stored.iter().all(|o| o.ordering.is_permutation_of(n)) => {
                debug!(key = %key, orderings = stored.len(), "Reusing checkpointed orderings");
                return Some(stored);
            }
            Ok(Some(_)) => {
                warn!(key = %key, rows = n, "Checkpointed orderings do not fit the data, recomputing");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(key = %key, error = %e, "Checkpoint unavailable, computing without persistence");
                persist = false;
            }
        }

        let start = Instant::now();
        let orderings = match strategy.sort(data) {
            Ok(orderings) => orderings,
            Err(e) => {
                info!(key = %key, error = %e, "Strategy skipped");
                return None;
            }
        };
        info!(
            key = %key,
            orderings = orderings.len(),
            elapsed = ?start.elapsed(),
            "Strategy finished"
        );

        if persist {
            match self.checkpoints.save(&key, &orderings) {
                Ok(true) => {}
                // another writer got there first; its record is the one that counts
                Ok(false) => match self.checkpoints.check::<Vec<NamedOrdering>>(&key) {
                    Ok(Some(stored)) if stored.iter().all(|o| o.ordering.is_permutation_of(n)) => {
                        debug!(key = %key, "Checkpoint written concurrently, using stored orderings");
                        return Some(stored);
                    }
                    Ok(_) => {
                        warn!(key = %key, rows = n, "Stored orderings do not fit the data, keeping computed ones");
                    }
                    Err(e) => {
                        warn!(key = %key, error = %e, "Checkpoint unreadable after save, keeping computed orderings");
                    }
                },
                Err(e) => warn!(key = %key, error = %e, "Failed to save checkpoint"),
            }
        }
        Some(orderings)
    }

    fn score(&self, kind: &SeriesKind, data: &Ensemble, named: NamedOrdering) -> StrategyResult {
        let score = match self.engine.score_ordering(data, &named.ordering) {
            Ok(score) => score,
            Err(e) => {
                warn!(series = %kind, ordering = %named.name, error = %e, "Ordering could not be scored");
                ScoreTriple::default()
            }
        };
        StrategyResult::scored(named, score)
    }

    fn series_results(
        &self,
        stage: Stage,
        series: Vec<(SeriesKind, Cow<'_, Ensemble>)>,
        existing: &[SeriesResults],
    ) -> StageResults {
        let run = |(kind, data): (SeriesKind, Cow<'_, Ensemble>)| -> SeriesResults {
            match existing.iter().find(|s| s.series == kind) {
                Some(done) => {
                    debug!(stage = %stage, series = %kind, "Series already in results, skipping");
                    done.clone()
                }
                None => self.reorder_series(stage, &kind, &data),
            }
        };

        if self.config.parallel_series {
            series.into_par_iter().map(run).collect()
        } else {
            series.into_iter().map(run).collect()
        }
    }
}

impl<S: KeyValueStore> ReorderingApi for ReorderingService<S> {
    fn reorder_series(&self, stage: Stage, kind: &SeriesKind, data: &Ensemble) -> SeriesResults {
        let start = Instant::now();
        let n = data.n_rows();
        let mut results = vec![StrategyResult::base(self.engine.score(data), n)];

        for strategy in self.catalog.strategies() {
            let Some(orderings) = self.family_orderings(stage, kind, data, strategy.as_ref()) else {
                continue;
            };
            results.extend(orderings.into_iter().map(|named| self.score(kind, data, named)));
        }

        info!(
            stage = %stage,
            series = %kind,
            rows = n,
            results = results.len(),
            elapsed = ?start.elapsed(),
            "Series reordered"
        );
        SeriesResults::new(kind.clone(), results)
    }

    fn reorder_stage(&self, stage: Stage, input: &StageInput, existing: &[SeriesResults]) -> StageResults {
        let series = match input.series() {
            Ok(series) => series,
            Err(e) => {
                warn!(stage = %stage, error = %e, "Derived series unavailable, using base series only");
                input
                    .base_series()
                    .into_iter()
                    .map(|(kind, data)| (kind, Cow::Borrowed(data)))
                    .collect()
            }
        };
        info!(stage = %stage, series = series.len(), rows = input.n_rows(), "Reordering stage");
        self.series_results(stage, series, existing)
    }

    fn reorder_dataset(&self, input: &DatasetInput, existing: Option<&DatasetResults>) -> DatasetResults {
        if input.dataset != self.config.dataset {
            warn!(
                input = %input.dataset,
                checkpoints = %self.config.dataset,
                "Input dataset differs from the checkpoint namespace"
            );
        }
        let mut results = DatasetResults::new(input.dataset.as_str());
        for (stage, stage_input) in input.stages() {
            let done = existing.map(|r| r.stage(stage)).unwrap_or(&[]);
            let stage_results = self.reorder_stage(stage, stage_input, done);
            results.stages.insert(stage, stage_results);
        }
        results
    }
}
