//! # Interestingness Flow
//!
//! Segment detection (ro-06) on orderings produced by the coordinator.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::shuffle;
    use ro_03_checkpoint_store::InMemoryKVStore;
    use ro_04_sorting_strategies::{ClusteringStrategy, NaiveStrategy, SortingStrategy, StrategyCatalog};
    use ro_05_reordering::{ReorderingApi, ReorderingConfig, ReorderingService};
    use ro_06_interestingness::InterestingnessDetector;
    use shared_types::{Ensemble, Permutation, SeriesKind, Stage};

    /// 40 identical sine rows, except one-hot spikes at rows 20..=22.
    fn spiked() -> Ensemble {
        let rows = (0..40)
            .map(|i| {
                if (20..=22).contains(&i) {
                    let mut row = vec![0.0; 30];
                    row[5 + (i - 20) * 7] = 1.0;
                    row
                } else {
                    (0..30).map(|t| (t as f64 * 0.3).sin()).collect()
                }
            })
            .collect();
        Ensemble::from_rows(rows).unwrap()
    }

    fn inverse(p: &Permutation) -> Permutation {
        let mut inv = vec![0; p.len()];
        for (position, &row) in p.as_slice().iter().enumerate() {
            inv[row] = position;
        }
        Permutation::try_new(inv).unwrap()
    }

    #[test]
    fn test_inverted_block_is_flagged() {
        let rows = (0..40)
            .map(|i| {
                let sign = if (15..=19).contains(&i) { -1.0 } else { 1.0 };
                (0..50).map(|t| sign * (t as f64 * 0.2).sin()).collect()
            })
            .collect();
        let data = Ensemble::from_rows(rows).unwrap();

        let segments = InterestingnessDetector::default()
            .detect(&data, &Permutation::identity(40))
            .unwrap();
        // the block edges stand out, its interior and the far rows do not
        assert!(!segments.is_empty());
        assert!(segments.iter().all(|s| s.overlaps(15, 19)), "{segments:?}");
        assert!(segments.iter().all(|s| s.start >= 13 && s.end <= 21), "{segments:?}");
    }

    #[test]
    fn test_segments_depend_on_the_ordering_not_the_storage() {
        let detector = InterestingnessDetector::default();
        let data = spiked();
        let expected = detector.detect(&data, &Permutation::identity(40)).unwrap();
        assert!(!expected.is_empty());

        let storage = shuffle(40, 21);
        let stored = data.reordered(&storage).unwrap();
        let segments = detector.detect(&stored, &inverse(&storage)).unwrap();
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_segments_of_every_coordinator_ordering_are_well_formed() {
        let data = spiked().reordered(&shuffle(40, 22)).unwrap();
        let catalog = StrategyCatalog::from_strategies(vec![
            Box::new(NaiveStrategy::new()) as Box<dyn SortingStrategy>,
            Box::new(ClusteringStrategy::new()),
        ]);
        let service = ReorderingService::with_catalog(
            ReorderingConfig::for_dataset("spikes"),
            InMemoryKVStore::new(),
            catalog,
        );
        let series = service.reorder_series(Stage::Validation, &SeriesKind::RawData, &data);
        assert_eq!(series.results.len(), 14);

        let detector = InterestingnessDetector::default();
        for result in &series.results {
            let ordering = result.ordering.as_ref().unwrap();
            for segment in detector.detect(&data, ordering).unwrap() {
                assert!(segment.start < segment.end, "{}: {segment:?}", result.name);
                assert!(segment.end < 40, "{}: {segment:?}", result.name);
                assert!(segment.representative < 30, "{}: {segment:?}", result.name);
            }
        }
    }
}
