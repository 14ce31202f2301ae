//! # Scoring Flow
//!
//! Metrics (ro-01) feeding the scoring engine (ro-02) on whole ensembles.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{noise, phase_ramp, shuffle};
    use ro_01_distance_metrics::{distance_sweep, Metric};
    use ro_02_scoring::{neighborhood_dist, neighborhood_dist_naive, ScoringEngine};
    use shared_types::Ensemble;

    // =========================================================================
    // Banded neighborhood score
    // =========================================================================

    #[test]
    fn test_banded_neighborhood_matches_full_matrix() {
        let metrics = [
            Metric::Euclidean,
            Metric::NormalizedEuclidean,
            Metric::Manhattan,
            Metric::Cosine,
            Metric::Wasserstein,
        ];
        for n in [3, 25, 64] {
            let data = noise(n, 16, n as u64);
            for neighborhood in [1, 4, 10] {
                for metric in metrics {
                    let banded = neighborhood_dist(data.view(), neighborhood, metric).unwrap();
                    let full = neighborhood_dist_naive(data.view(), neighborhood, metric).unwrap();
                    assert!(
                        (banded - full).abs() <= 1e-9 * (1.0 + full.abs()),
                        "n={n} nb={neighborhood} {metric}: {banded} != {full}"
                    );
                }
            }
        }
    }

    // =========================================================================
    // Engine
    // =========================================================================

    #[test]
    fn test_sorted_phases_score_better_than_shuffled() {
        let engine = ScoringEngine::new();
        let sorted = phase_ramp(60, 48);
        let shuffled = sorted.reordered(&shuffle(60, 11)).unwrap();

        let good = engine.score(&sorted).neighborhood.unwrap();
        let bad = engine.score(&shuffled).neighborhood.unwrap();
        assert!(good < bad, "{good} >= {bad}");
    }

    #[test]
    fn test_scoring_an_ordering_scores_the_reordered_copy() {
        let engine = ScoringEngine::new();
        let data = noise(30, 20, 5);
        let ordering = shuffle(30, 6);

        let via_ordering = engine.score_ordering(&data, &ordering).unwrap();
        let via_copy = engine.score(&data.reordered(&ordering).unwrap());
        assert_eq!(via_ordering, via_copy);
        assert!(via_ordering.is_complete());
    }

    // =========================================================================
    // Metric sweep
    // =========================================================================

    #[test]
    fn test_sweep_finds_the_planted_twin() {
        let mut rows = noise(12, 24, 9).to_rows();
        rows[7] = rows[0].iter().map(|v| v + 1e-6).collect();
        let data = Ensemble::from_rows(rows).unwrap();

        let entries = distance_sweep(
            data.view(),
            &[Metric::Euclidean, Metric::Manhattan, Metric::Pearson],
        );
        assert_eq!(entries.len(), 3);
        for entry in entries {
            assert_eq!(entry.nearest, Some(7), "{}", entry.metric);
        }
    }
}
