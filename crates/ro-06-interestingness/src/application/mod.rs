//! Application layer.

pub mod detector;
