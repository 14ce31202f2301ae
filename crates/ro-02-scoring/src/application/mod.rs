//! Application layer: the scoring engine.

pub mod engine;
