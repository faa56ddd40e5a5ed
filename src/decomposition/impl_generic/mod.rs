//! Generic decomposition implementations.

mod pca;

pub use pca::{covariance_matrix, pca_impl, power_iteration_impl};
