//! Scoring algorithms.

pub mod convolution;
pub mod entropy;
pub mod neighborhood;

pub use convolution::baseline_convolution;
pub use entropy::baseline_entropy;
pub use neighborhood::{neighborhood_dist, neighborhood_dist_naive};
