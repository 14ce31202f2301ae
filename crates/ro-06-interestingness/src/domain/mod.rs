//! Domain layer.

pub mod errors;
