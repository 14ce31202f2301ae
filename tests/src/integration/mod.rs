//! Cross-crate integration flows.

pub mod fixtures;

mod batch_flow;
mod interestingness_flow;
mod reordering_flow;
mod scoring_flow;
mod strategy_flow;
