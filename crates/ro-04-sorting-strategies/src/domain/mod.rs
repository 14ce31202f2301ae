//! Domain layer for sorting strategies.

pub mod errors;
