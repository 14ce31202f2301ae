//! # Batch Flow
//!
//! A whole batch run from an input document on disk to a results document.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::input_document;
    use batch_runtime::{run, RuntimeConfig};
    use ro_03_checkpoint_store::FileKVStore;
    use ro_05_reordering::DatasetResults;
    use shared_types::{SeriesKind, Stage};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup(dataset: &str) -> (TempDir, RuntimeConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        std::fs::write(&input, input_document(dataset, 24, 40)).unwrap();
        let config = RuntimeConfig {
            input,
            results_dir: dir.path().join("results"),
            checkpoint_dir: dir.path().join("checkpoints"),
            ..RuntimeConfig::default()
        };
        (dir, config)
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

    #[test]
    fn test_batch_writes_results_and_is_resumable() {
        let (_dir, config) = setup("demo");

        let path = run(&config).unwrap();
        assert_eq!(path, config.results_dir.join("demo-results.json"));
        let first = DatasetResults::load(&path).unwrap();
        assert_eq!(first.dataset, "demo");
        assert_eq!(first.stage(Stage::Test).len(), 5);

        let raw = first.series(Stage::Test, &SeriesKind::RawData).unwrap();
        assert!(raw.result(&config.segment_strategy).is_some());
        for segment in &raw.segments {
            assert!(segment.start < segment.end && segment.end < 24);
        }
        let checkpoints = checkpoint_files(&config.checkpoint_dir);
        assert!(checkpoints > 0);

        run(&config).unwrap();
        let second = DatasetResults::load(&path).unwrap();
        assert_eq!(checkpoint_files(&config.checkpoint_dir), checkpoints);
        assert_eq!(second.stage(Stage::Test).len(), 5);
        for (a, b) in first.stage(Stage::Test).iter().zip(second.stage(Stage::Test)) {
            assert_eq!(a.series, b.series);
            assert_eq!(a.segments, b.segments);
            let orderings = |s: &ro_05_reordering::SeriesResults| {
                s.results.iter().map(|r| (r.name.clone(), r.ordering.clone())).collect::<Vec<_>>()
            };
            assert_eq!(orderings(a), orderings(b));
        }
    }

    #[test]
    fn test_dataset_override_names_the_results() {
        let (_dir, mut config) = setup("demo");
        config.dataset = Some("renamed".to_string());

        let path = run(&config).unwrap();
        assert_eq!(path, config.results_dir.join("renamed-results.json"));
        assert_eq!(DatasetResults::load(&path).unwrap().dataset, "renamed");
    }

    #[test]
    fn test_missing_input_fails() {
        let (dir, mut config) = setup("demo");
        config.input = dir.path().join("absent.json");
        assert!(run(&config).is_err());
        assert!(!config.results_dir.join("demo-results.json").exists());
    }
}
