//! # RO-02: Scoring Engine
//!
//! Three descriptive measures of how visually coherent an ordering is. None
//! of them is used to pick a winner; they are reported next to every result.
//!
//! ## Architecture
//!
//! - **Algorithms**: neighborhood distance (sparse band and naive reference),
//!   wrap-around convolution, block entropy
//! - **Application**: [`ScoringEngine`] runs all three, logging and absorbing
//!   failures so one bad measure never aborts a batch
//! - **Config**: [`ScoringConfig`]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;

pub use algorithms::{
    baseline_convolution, baseline_entropy, neighborhood_dist, neighborhood_dist_naive,
};
pub use application::engine::ScoringEngine;
pub use config::ScoringConfig;
pub use domain::errors::ScoreError;
