//! # RO-06: Interestingness
//!
//! Flags ranges of an ordering where rows differ sharply from their
//! neighbours, and picks the column where each range responds most.
//!
//! ## Architecture
//!
//! - **Algorithms**: quantiles, row preprocessing, Gaussian smoothing and
//!   binarization, local dissimilarity and range extraction
//! - **Application**: [`InterestingnessDetector`]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;

pub use application::detector::InterestingnessDetector;
pub use config::InterestingnessConfig;
pub use domain::errors::InterestingnessError;
