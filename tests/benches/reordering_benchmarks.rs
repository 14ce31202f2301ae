//! # Ensemble Reordering Benchmarks
//!
//! | Area | Claim |
//! |------|-------|
//! | ro-02 Neighborhood score | Banded evaluation is `O(n * nb)` metric calls, full is `O(n^2)` |
//! | ro-02 Scoring engine | All three measures on one ordering |
//! | ro-04 Clustering | 12 linkage/basis orderings with optimal leaf ordering |
//! | ro-04 Feature | 8 descriptor orderings |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ro_01_distance_metrics::Metric;
use ro_02_scoring::{neighborhood_dist, neighborhood_dist_naive, ScoringEngine};
use ro_04_sorting_strategies::{ClusteringStrategy, FeatureStrategy, SortingStrategy};
use ro_tests::integration::fixtures::{noise, phase_ramp, shuffle};
use std::time::Duration;

// ============================================================================
// RO-02: Neighborhood score, banded vs full matrix
// ============================================================================

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("ro-02-neighborhood");
    group.measurement_time(Duration::from_secs(10));

    for rows in [100, 400, 1000] {
        let data = noise(rows, 64, rows as u64);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("banded", rows), &data, |b, data| {
            b.iter(|| black_box(neighborhood_dist(data.view(), 10, Metric::NormalizedEuclidean)))
        });
        group.bench_with_input(BenchmarkId::new("full", rows), &data, |b, data| {
            b.iter(|| {
                black_box(neighborhood_dist_naive(data.view(), 10, Metric::NormalizedEuclidean))
            })
        });
    }

    group.finish();
}

fn bench_scoring_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("ro-02-scoring");
    let engine = ScoringEngine::new();

    for rows in [100, 500] {
        let data = phase_ramp(rows, 128);
        let ordering = shuffle(rows, 1);
        group.bench_with_input(BenchmarkId::new("score_ordering", rows), &data, |b, data| {
            b.iter(|| black_box(engine.score_ordering(data, &ordering)))
        });
    }

    group.finish();
}

// ============================================================================
// RO-04: Sorting strategies
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("ro-04-strategies");
    group.sample_size(10);

    for rows in [50, 200] {
        let data = phase_ramp(rows, 64).reordered(&shuffle(rows, 2)).unwrap();
        group.bench_with_input(BenchmarkId::new("clustering", rows), &data, |b, data| {
            b.iter(|| black_box(ClusteringStrategy::new().sort(data)))
        });
        group.bench_with_input(BenchmarkId::new("feature", rows), &data, |b, data| {
            b.iter(|| black_box(FeatureStrategy::new().sort(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_neighborhood, bench_scoring_engine, bench_strategies);
criterion_main!(benches);
