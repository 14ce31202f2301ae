//! Adapters for the checkpoint store.

pub mod lock;
pub mod storage;
