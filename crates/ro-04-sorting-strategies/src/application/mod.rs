//! Application layer: the strategy catalog.

pub mod catalog;
