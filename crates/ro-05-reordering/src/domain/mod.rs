//! Domain layer: input and results documents.

pub mod errors;
pub mod input;
pub mod results;
