//! # RO-03: Checkpoint Store
//!
//! Persists each strategy family's orderings once computed. A record is never
//! overwritten: the first writer wins and later writers are told the key was
//! already taken.
//!
//! ## Architecture
//!
//! - **Domain**: [`CheckpointKey`] and error types
//! - **Ports**: [`KeyValueStore`], the byte-level storage contract
//! - **Adapters**: [`InMemoryKVStore`] for tests and dry runs,
//!   [`FileKVStore`] (one file per key under an exclusive directory lock)
//! - **Application**: [`CheckpointStore`], typed `check`/`save` on top of any
//!   [`KeyValueStore`]

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use adapters::lock::StoreLock;
pub use adapters::storage::{FileKVStore, InMemoryKVStore};
pub use application::store::CheckpointStore;
pub use domain::errors::{CheckpointError, StoreError};
pub use domain::key::CheckpointKey;
pub use ports::outbound::KeyValueStore;
