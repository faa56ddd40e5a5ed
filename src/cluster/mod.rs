//! Clustering algorithms.
//!
//! K-means with k-means++ seeding, silhouette scoring, elbow/silhouette
//! selection of the cluster count and per-cluster profiles.

mod cpu;
pub mod impl_generic;
mod profile;
pub mod traits;
mod validation;

pub use profile::{cluster_profiles, ClusterProfile};
pub use traits::kmeans::{
    EmptyClusterPolicy, InertiaMetric, KMeansAlgorithms, KMeansOptions, KMeansResult,
};
pub use traits::metrics::ClusterMetricsAlgorithms;
pub use traits::selection::{
    ClusterSelectionAlgorithms, OptimalKOptions, OptimalKResult, SelectionMethod,
};
pub use validation::*;
