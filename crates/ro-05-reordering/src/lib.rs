//! # RO-05: Reordering Coordinator
//!
//! Drives the strategy catalog over a dataset: for every stage, every series
//! and every strategy family, reuse or compute the family's orderings and
//! score them.
//!
//! ## Architecture
//!
//! - **Domain**: the input document ([`DatasetInput`]) with derived histogram
//!   series, and the results document ([`DatasetResults`])
//! - **Ports**: [`ReorderingApi`]
//! - **Application**: [`ReorderingService`], generic over the checkpoint
//!   [`KeyValueStore`](ro_03_checkpoint_store::KeyValueStore)
//!
//! ## Resumability
//!
//! A family's orderings are checkpointed only once the whole family is done.
//! A restarted run recomputes at most the family that was interrupted, and
//! series already present in an existing results document are skipped.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::ReorderingService;
pub use config::ReorderingConfig;
pub use domain::errors::{InputError, ResultsError};
pub use domain::input::{row_histograms, DatasetInput, StageInput};
pub use domain::results::{DatasetResults, SeriesResults, StageResults};
pub use ports::inbound::ReorderingApi;
