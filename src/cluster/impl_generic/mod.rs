//! Generic clustering algorithm implementations.

pub mod kmeans;
pub mod metrics;
pub mod selection;

pub use kmeans::{kmeans_impl, kmeans_predict_impl};
pub use metrics::{silhouette_samples_impl, silhouette_score_impl};
pub use selection::{elbow_k, find_optimal_k_impl, silhouette_k};
