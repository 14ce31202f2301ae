//! # Batch Runtime
//!
//! Offline driver of the reordering engine.
//!
//! ## Run Sequence
//!
//! 1. Load configuration from the environment
//! 2. Parse and validate the input document (abort on schema errors)
//! 3. Open the checkpoint directory
//! 4. Per stage: reorder every series, detect segments, save the results
//!
//! Re-running with the same directories resumes: finished series come from
//! the results document, finished families from checkpoints.

pub mod config;
pub mod pipeline;
pub mod telemetry;

pub use config::RuntimeConfig;
pub use pipeline::run;
pub use telemetry::{init_telemetry, TelemetryConfig};
