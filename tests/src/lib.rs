//! # Ensemble Reordering Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate flows
//!     ├── fixtures.rs           # Shared ensembles
//!     ├── scoring_flow.rs       # Metrics + scoring
//!     ├── strategy_flow.rs      # Catalog on structured data
//!     ├── reordering_flow.rs    # Coordinator + file checkpoints
//!     ├── interestingness_flow.rs
//!     └── batch_flow.rs         # Whole batch from a JSON document
//! tests/benches/
//! └── reordering_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ro-tests
//!
//! # One flow
//! cargo test -p ro-tests integration::reordering_flow
//!
//! # Benchmarks
//! cargo bench -p ro-tests
//! ```

pub mod integration;
