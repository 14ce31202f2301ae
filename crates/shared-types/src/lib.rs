//! # Shared Types Crate
//!
//! Domain types exchanged between the reordering crates.
//!
//! ## Design Principles
//!
//! - **Never mutate caller data**: an [`Ensemble`] is only ever reordered into
//!   a fresh working copy.
//! - **Validated at construction**: ragged rows and non-permutations are
//!   rejected when the value is built or deserialized, not when it is used.
//! - **Tagged variants over strings**: series, stages and strategy families are
//!   enums matched exhaustively.

pub mod entities;
pub mod errors;
pub mod results;
pub mod series;

pub use entities::*;
pub use errors::*;
pub use results::*;
pub use series::*;
