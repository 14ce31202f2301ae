//! Numeric building blocks of the strategies.

pub mod descriptors;
pub mod leaf_order;
pub mod linkage;
pub mod pca;
pub mod umap;
