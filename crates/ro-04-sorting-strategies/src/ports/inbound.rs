//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::StrategyError;
use shared_types::{Ensemble, NamedOrdering, StrategyFamily};

/// One family of sorting strategies.
///
/// Implementations never modify `data`; every returned ordering is a
/// permutation of `0..data.n_rows()`.
pub trait SortingStrategy: Send + Sync {
    /// Family this strategy belongs to (also its checkpoint slot).
    fn family(&self) -> StrategyFamily;

    /// Compute all orderings of this family.
    fn sort(&self, data: &Ensemble) -> Result<Vec<NamedOrdering>, StrategyError>;
}
