//! Decomposition traits.

pub mod pca;
