//! CPU bindings for clustering algorithms.

mod kmeans;
mod metrics;
mod selection;
