//! Detection steps.

pub mod gaussian;
pub mod preprocess;
pub mod quantile;
pub mod segments;
