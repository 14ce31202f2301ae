//! # Strategy Flow
//!
//! The full strategy catalog (ro-04) on ensembles with a known row order.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{phase_ramp, shuffle};
    use ro_04_sorting_strategies::{
        ClusteringStrategy, FeatureStrategy, NaiveStrategy, SortingStrategy, StrategyCatalog,
        StrategyConfig,
    };
    use shared_types::{Ensemble, NamedOrdering, Permutation};
    use std::collections::BTreeSet;

    /// Rows `i * (1, 2, ..., m)`: pairwise distances are exactly one-dimensional.
    fn scaled_ramp(n: usize, m: usize) -> Ensemble {
        let rows = (0..n)
            .map(|i| (0..m).map(|t| i as f64 * (1.0 + t as f64)).collect())
            .collect();
        Ensemble::from_rows(rows).unwrap()
    }

    /// Original row indices visited by `ordering` over rows stored as `storage`.
    fn recovered(ordering: &Permutation, storage: &Permutation) -> Vec<usize> {
        ordering.as_slice().iter().map(|&k| storage.as_slice()[k]).collect()
    }

    fn is_monotone(order: &[usize]) -> bool {
        order.windows(2).all(|w| w[0] < w[1]) || order.windows(2).all(|w| w[0] > w[1])
    }

    fn find<'a>(orderings: &'a [NamedOrdering], name: &str) -> &'a Permutation {
        &orderings
            .iter()
            .find(|o| o.name == name)
            .unwrap_or_else(|| panic!("missing ordering {name}"))
            .ordering
    }

    #[test]
    fn test_catalog_yields_unique_permutations() {
        let config = StrategyConfig {
            n_epochs: Some(50),
            ..StrategyConfig::default()
        };
        let catalog = StrategyCatalog::new(config);
        let data = phase_ramp(24, 32).reordered(&shuffle(24, 3)).unwrap();

        let mut names = BTreeSet::new();
        for strategy in catalog.strategies() {
            let orderings = strategy.sort(&data).unwrap();
            assert!(!orderings.is_empty(), "{}", strategy.family());
            for named in orderings {
                assert!(named.ordering.is_permutation_of(24), "{}", named.name);
                assert!(names.insert(named.name.clone()), "duplicate {}", named.name);
            }
        }
        assert_eq!(names.len(), 35);
    }

    #[test]
    fn test_simple_strategies_recover_a_ramp() {
        let storage = shuffle(20, 4);
        let data = scaled_ramp(20, 12).reordered(&storage).unwrap();
        let sorted: Vec<usize> = (0..20).collect();

        let naive = NaiveStrategy::new().sort(&data).unwrap();
        assert_eq!(recovered(&naive[0].ordering, &storage), sorted);

        let features = FeatureStrategy::new().sort(&data).unwrap();
        let energy = find(&features, "Absolute Energy");
        assert_eq!(recovered(energy, &storage), sorted);
    }

    #[test]
    fn test_contiguous_linkages_recover_a_ramp() {
        let storage = shuffle(18, 8);
        let data = scaled_ramp(18, 6).reordered(&storage).unwrap();
        let orderings = ClusteringStrategy::new().sort(&data).unwrap();

        for name in ["Single Euclidean", "Average Euclidean", "Complete Euclidean"] {
            let order = recovered(find(&orderings, name), &storage);
            assert!(is_monotone(&order), "{name}: {order:?}");
        }
    }
}
