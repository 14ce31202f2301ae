//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the reordering coordinator.

use crate::domain::input::{DatasetInput, StageInput};
use crate::domain::results::{DatasetResults, SeriesResults, StageResults};
use shared_types::{Ensemble, SeriesKind, Stage};

/// Primary API of the reordering coordinator.
///
/// None of these calls fail: strategy and scoring failures are logged and
/// leave gaps in the results (no entry for a failed family, `None` for a
/// failed score).
pub trait ReorderingApi {
    /// Score the identity ordering, then every family's orderings.
    fn reorder_series(&self, stage: Stage, kind: &SeriesKind, data: &Ensemble) -> SeriesResults;

    /// Reorder every series of a stage, reusing the entries of `existing`.
    ///
    /// The returned list covers every series of `input` in enumeration order.
    fn reorder_stage(&self, stage: Stage, input: &StageInput, existing: &[SeriesResults]) -> StageResults;

    /// Reorder every stage present in `input`.
    fn reorder_dataset(&self, input: &DatasetInput, existing: Option<&DatasetResults>) -> DatasetResults;
}
