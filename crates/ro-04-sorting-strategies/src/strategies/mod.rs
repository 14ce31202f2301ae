//! One [`SortingStrategy`](crate::SortingStrategy) per strategy family.

mod clustering;
mod feature;
mod naive;
mod projection;
mod reduced;

pub use clustering::{ClusteringStrategy, DistanceBasis};
pub use feature::FeatureStrategy;
pub use naive::NaiveStrategy;
pub use projection::ProjectionStrategy;
pub use reduced::ReducedClusteringStrategy;
