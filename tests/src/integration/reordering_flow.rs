//! # Reordering Flow
//!
//! The coordinator (ro-05) over the real strategy catalog, scoring engine and
//! file-backed checkpoint store.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{input_document, phase_ramp, shuffle};
    use ro_03_checkpoint_store::{FileKVStore, InMemoryKVStore};
    use ro_04_sorting_strategies::{SortingStrategy, StrategyCatalog, StrategyError};
    use ro_05_reordering::{DatasetInput, ReorderingApi, ReorderingConfig, ReorderingService};
    use shared_types::{Ensemble, NamedOrdering, SeriesKind, Stage, StrategyFamily, StrategyResult};
    use std::path::Path;

    /// Fails the test if the coordinator ever computes this family.
    struct Unreachable(StrategyFamily);

    impl SortingStrategy for Unreachable {
        fn family(&self) -> StrategyFamily {
            self.0
        }

        fn sort(&self, _data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
            panic!("{} should have come from a checkpoint", self.0)
        }
    }

    fn config(dataset: &str) -> ReorderingConfig {
        let mut config = ReorderingConfig::for_dataset(dataset);
        config.strategies.n_epochs = Some(50);
        config
    }

    fn checkpoint_files(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| {
                e.path().extension().and_then(|x| x.to_str()) == Some(FileKVStore::EXTENSION)
            })
            .count()
    }

    fn names(results: &[StrategyResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_checkpoints_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let data = phase_ramp(20, 24).reordered(&shuffle(20, 1)).unwrap();

        let first = {
            let service = ReorderingService::new(config("ramp"), FileKVStore::open(dir.path()).unwrap());
            service.reorder_series(Stage::Train, &SeriesKind::RawData, &data)
        };
        assert_eq!(first.results.len(), 36);
        assert_eq!(checkpoint_files(dir.path()), StrategyFamily::ALL.len());

        let catalog = StrategyCatalog::from_strategies(
            StrategyFamily::ALL
                .iter()
                .map(|&family| Box::new(Unreachable(family)) as Box<dyn SortingStrategy>)
                .collect(),
        );
        let restarted = ReorderingService::with_catalog(
            config("ramp"),
            FileKVStore::open(dir.path()).unwrap(),
            catalog,
        );
        let second = restarted.reorder_series(Stage::Train, &SeriesKind::RawData, &data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_checkpoints_are_scoped_by_dataset_and_stage() {
        let dir = tempfile::tempdir().unwrap();
        let data = phase_ramp(12, 16);

        let service = ReorderingService::new(config("ramp"), FileKVStore::open(dir.path()).unwrap());
        service.reorder_series(Stage::Train, &SeriesKind::RawData, &data);
        service.reorder_series(Stage::Test, &SeriesKind::RawData, &data);
        assert_eq!(checkpoint_files(dir.path()), 2 * StrategyFamily::ALL.len());

        let other = ReorderingService::new(config("other"), FileKVStore::open(dir.path()).unwrap());
        other.reorder_series(Stage::Train, &SeriesKind::RawData, &data);
        assert_eq!(checkpoint_files(dir.path()), 3 * StrategyFamily::ALL.len());
    }

    #[test]
    fn test_checkpoints_of_another_row_count_are_recomputed() {
        let dir = tempfile::tempdir().unwrap();
        let service = ReorderingService::new(config("ramp"), FileKVStore::open(dir.path()).unwrap());

        service.reorder_series(Stage::Test, &SeriesKind::RawData, &phase_ramp(20, 16));
        let smaller = service.reorder_series(Stage::Test, &SeriesKind::RawData, &phase_ramp(15, 16));

        assert_eq!(smaller.results.len(), 36);
        for result in &smaller.results {
            let ordering = result.ordering.as_ref().unwrap();
            assert!(ordering.is_permutation_of(15), "{}", result.name);
        }
    }

    #[test]
    fn test_odd_row_out_lands_at_an_end() {
        let rows = (0..20)
            .map(|i| {
                let sign = if i == 0 { -1.0 } else { 1.0 };
                (0..32).map(|t| sign * (t as f64 * 0.25).sin()).collect()
            })
            .collect();
        let data = Ensemble::from_rows(rows).unwrap();
        let service = ReorderingService::new(config("odd"), InMemoryKVStore::new());

        let series = service.reorder_series(Stage::Train, &SeriesKind::RawData, &data);
        let ward = series.result("Ward Normalized Euclidean").unwrap();
        let order = ward.ordering.as_ref().unwrap().as_slice();
        assert!(order[0] == 0 || order[19] == 0, "{order:?}");
    }

    #[test]
    fn test_dataset_document_end_to_end() {
        let input = DatasetInput::from_json_str(&input_document("demo", 24, 40)).unwrap();
        let service = ReorderingService::new(config("demo"), InMemoryKVStore::new());

        let results = service.reorder_dataset(&input, None);
        assert_eq!(results.dataset, "demo");
        assert_eq!(results.stages.keys().copied().collect::<Vec<_>>(), vec![Stage::Test]);

        let series: Vec<String> = results.stage(Stage::Test).iter().map(|s| s.name.clone()).collect();
        assert_eq!(
            series,
            vec!["Raw Data", "Labels", "Saliency", "Raw Data Histogram", "Saliency Histogram"]
        );

        let raw = results.series(Stage::Test, &SeriesKind::RawData).unwrap();
        assert_eq!(raw.results.len(), 36);
        assert_eq!(raw.results[0].name, StrategyResult::BASE);
        assert!(raw.results.iter().all(|r| r.score.neighborhood.is_some()));

        // scalar labels only admit plain sorting
        let labels = results.series(Stage::Test, &SeriesKind::Labels).unwrap();
        assert_eq!(names(&labels.results), vec!["Base", "Sorting"]);

        // a second pass over the finished document reuses every series
        let again = service.reorder_dataset(&input, Some(&results));
        assert_eq!(again, results);
    }
}
