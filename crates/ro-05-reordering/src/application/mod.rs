//! Application layer: the reordering service.

pub mod service;
