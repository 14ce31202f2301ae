//! Strategy catalog: one strategy per family, in run order.

use crate::config::StrategyConfig;
use crate::ports::inbound::SortingStrategy;
use crate::strategies::{
    ClusteringStrategy, FeatureStrategy, NaiveStrategy, ProjectionStrategy,
    ReducedClusteringStrategy,
};
use shared_types::StrategyFamily;

/// The fixed list of strategies the coordinator runs for every series.
pub struct StrategyCatalog {
    strategies: Vec<Box<dyn SortingStrategy>>,
}

impl StrategyCatalog {
    pub fn new(config: StrategyConfig) -> Self {
        let strategies: Vec<Box<dyn SortingStrategy>> = vec![
            Box::new(NaiveStrategy::new()),
            Box::new(FeatureStrategy::new()),
            Box::new(ProjectionStrategy::new(config.clone())),
            Box::new(ClusteringStrategy::new()),
            Box::new(ReducedClusteringStrategy::new(config)),
        ];
        Self { strategies }
    }

    /// Build a catalog from custom strategies (tests, partial runs).
    pub fn from_strategies(strategies: Vec<Box<dyn SortingStrategy>>) -> Self {
        Self { strategies }
    }

    /// Strategies in run order.
    pub fn strategies(&self) -> &[Box<dyn SortingStrategy>] {
        &self.strategies
    }

    pub fn get(&self, family: StrategyFamily) -> Option<&dyn SortingStrategy> {
        self.strategies
            .iter()
            .find(|s| s.family() == family)
            .map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}
