//! Directory locking for the file store.

mod flock;

pub use flock::StoreLock;
