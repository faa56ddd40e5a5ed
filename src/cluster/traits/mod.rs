//! Clustering algorithm traits.

pub mod kmeans;
pub mod metrics;
pub mod selection;
