//! Orderings by per-row descriptors.

use crate::algorithms::descriptors::Descriptor;
use crate::domain::errors::StrategyError;
use crate::ports::inbound::SortingStrategy;
use rayon::prelude::*;
use shared_types::{Ensemble, NamedOrdering, Permutation, StrategyFamily};
use tracing::debug;

/// One ordering per [`Descriptor`], ascending by descriptor value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureStrategy;

impl FeatureStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Descriptor values of every row, `values[d][row]`.
    fn descriptor_table(data: &Ensemble) -> Vec<Vec<f64>> {
        let per_row: Vec<[f64; 8]> = (0..data.n_rows())
            .into_par_iter()
            .map(|row| {
                let x = data.row(row);
                Descriptor::ALL.map(|d| d.compute(x))
            })
            .collect();

        (0..Descriptor::ALL.len())
            .map(|d| per_row.iter().map(|values| values[d]).collect())
            .collect()
    }
}

impl SortingStrategy for FeatureStrategy {
    fn family(&self) -> StrategyFamily {
        StrategyFamily::Feature
    }

    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError> {
        if data.is_scalar() {
            return Err(StrategyError::RequiresSeries {
                strategy: "feature",
                rows: data.n_rows(),
            });
        }

        let table = Self::descriptor_table(data);
        let orderings = Descriptor::ALL
            .iter()
            .zip(&table)
            .map(|(descriptor, values)| {
                let nan = values.iter().filter(|v| v.is_nan()).count();
                if nan > 0 {
                    debug!(descriptor = descriptor.name(), nan, "NaN descriptor values sort last");
                }
                NamedOrdering::new(descriptor.name(), Permutation::argsort(values))
            })
            .collect();
        Ok(orderings)
    }
}
