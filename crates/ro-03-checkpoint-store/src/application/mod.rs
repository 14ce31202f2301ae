//! Application layer: typed checkpoint access.

pub mod store;
