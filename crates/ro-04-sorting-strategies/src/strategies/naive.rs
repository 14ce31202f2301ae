//! Lexicographic row sort.

use crate::domain::errors::StrategyError;
use crate::ports::inbound::SortingStrategy;
use shared_types::{Ensemble, NamedOrdering, Permutation, StrategyFamily};

/// Sorts rows lexicographically: column 0 first, ties broken by column 1, and
/// so on. Scalar ensembles get a plain stable argsort.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    pub const NAME: &'static str = "Sorting";

    pub fn new() -> Self {
        Self
    }

    fn lexicographic(data: &Ensemble) -> Result<Permutation, StrategyError> {
        let view = data.view();
        let mut order: Vec<usize> = (0..data.n_rows()).collect();
        // stable passes from the last column to the first
        for col in (0..data.n_cols()).rev() {
            let column = view.column(col);
            order.sort_by(|&a, &b| column[a].total_cmp(&column[b]));
        }
        Permutation::try_new(order).map_err(|e| StrategyError::Degenerate(e.to_string()))
    }
}

impl SortingStrategy for NaiveStrategy {
    fn family(&self) -> StrategyFamily {
        StrategyFamily::Naive
    }

    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
        let ordering = if data.is_scalar() {
            let values: Vec<f64> = data.view().column(0).to_vec();
            Permutation::argsort(&values)
        } else {
            Self::lexicographic(data)?
        };
        Ok(vec![NamedOrdering::new(Self::NAME, ordering)])
    }
}
