//! # RO-01: Distance Metric Library
//!
//! Pure pairwise distance and similarity functions over equal-length vectors,
//! plus the matrix helpers that feed hierarchical clustering.
//!
//! ## Architecture
//!
//! - **metrics**: one free function per metric
//! - **metric**: [`Metric`] enum dispatching to those functions, with the
//!   similarity ("reverse") and expensive flags
//! - **matrix**: upper-triangle fill and condensed symmetric matrices
//! - **histogram**: equal-width binning shared by the Bhattacharyya metric
//!   and histogram series derivation
//! - **sweep**: exhaustive nearest-neighbour diagnostics over all cheap metrics
//!
//! Correlation-style metrics (Pearson, Spearman, Bhattacharyya) are
//! similarities: higher means more alike. Callers must consult
//! [`Metric::is_similarity`] before treating a value as a distance.

pub mod histogram;
pub mod matrix;
pub mod metric;
pub mod metrics;
pub mod sweep;

pub use matrix::{euclidean_to_square, pearson_to_square, upper_triangle, CondensedMatrix};
pub use metric::Metric;
pub use sweep::{distance_sweep, SweepEntry};
