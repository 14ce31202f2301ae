//! Domain layer for scoring.

pub mod errors;
