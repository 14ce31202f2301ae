//! Domain layer for checkpoints.

pub mod errors;
pub mod key;
