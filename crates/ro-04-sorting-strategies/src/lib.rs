//! # RO-04: Sorting Strategies
//!
//! Each strategy family turns an ensemble into one or more named orderings.
//! Families run in a fixed order: naive, feature, projection, clustering,
//! reduced clustering.
//!
//! ## Architecture
//!
//! - **Algorithms**: row descriptors, PCA power iteration, UMAP,
//!   agglomerative linkage (nearest-neighbour chain) and optimal leaf ordering
//! - **Strategies**: one [`SortingStrategy`] per [`StrategyFamily`]
//! - **Ports**: the [`SortingStrategy`] trait
//! - **Application**: [`StrategyCatalog`], one strategy per family
//!
//! ## Failure containment
//!
//! Projection and clustering never fail on 2-D input: a numeric failure is
//! logged and replaced with the identity ordering. Strategies that need 2-D
//! data return [`StrategyError::RequiresSeries`] for scalar ensembles.
//!
//! [`StrategyFamily`]: shared_types::StrategyFamily

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod strategies;

pub use algorithms::descriptors::Descriptor;
pub use algorithms::linkage::{linkage, Linkage, Merge};
pub use algorithms::leaf_order::optimal_leaf_ordering;
pub use application::catalog::StrategyCatalog;
pub use config::StrategyConfig;
pub use domain::errors::StrategyError;
pub use ports::inbound::SortingStrategy;
pub use strategies::{
    ClusteringStrategy, DistanceBasis, FeatureStrategy, NaiveStrategy, ProjectionStrategy,
    ReducedClusteringStrategy,
};
