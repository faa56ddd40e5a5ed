//! tabclust - Unsupervised analysis of tabular records
//!
//! tabclust turns heterogeneous passenger-style records into a standardised
//! numeric matrix, reduces it with PCA, partitions it with K-means and scores
//! the partition.
//!
//! # Architecture
//!
//! ```text
//! records ─► preprocess ─► Matrix ─┬─► decomposition (PCA) ─┐
//!                                  └────────────────────────┴─► cluster (K-means,
//!                                                               silhouette, elbow,
//!                                                               profiles)
//! ```
//!
//! # Modules
//!
//! - [`preprocess`] - Feature engineering, imputation, one-hot encoding, standardisation
//! - [`decomposition`] - PCA by power iteration with deflation
//! - [`cluster`] - K-means++, silhouette, cluster count selection, cluster profiles
//! - [`runtime`] - [`CpuClient`], the seedable random source and cancellation token
//! - [`matrix`] - The [`Matrix`] type and row-wise constructors
//!
//! Algorithm families follow one layout: `traits/` holds the operation
//! contract with its option and result types, `impl_generic/` the algorithm
//! written against [`RuntimeClient`], and `cpu/` the binding for
//! [`CpuClient`].
//!
//! # Logging
//!
//! Operations emit `tracing` events. Install a subscriber to see them.
//!
//! # Example
//!
//! ```ignore
//! use tabclust::{
//!     preprocess, ClusterSelectionAlgorithms, CpuClient, KMeansAlgorithms, KMeansOptions,
//!     OptimalKOptions, PcaAlgorithms, PcaOptions, SelectionMethod,
//! };
//!
//! let prepared = preprocess(&records);
//! let client = CpuClient::with_seed(42);
//!
//! let pca = client.pca(&prepared.processed, &PcaOptions::with_components(2))?;
//! let sweep = client.find_optimal_k(
//!     &prepared.processed,
//!     &OptimalKOptions { method: SelectionMethod::Silhouette, ..Default::default() },
//! )?;
//! let k = sweep.recommended_k.unwrap_or(2);
//! let clusters = client.kmeans(&prepared.processed, &KMeansOptions::with_k(k))?;
//! ```

pub mod cluster;
pub mod decomposition;
pub mod error;
pub mod matrix;
pub mod preprocess;
pub mod runtime;

// Re-export main types for convenience
pub use cluster::{
    cluster_profiles, ClusterMetricsAlgorithms, ClusterProfile, ClusterSelectionAlgorithms,
    EmptyClusterPolicy, InertiaMetric, KMeansAlgorithms, KMeansOptions, KMeansResult,
    OptimalKOptions, OptimalKResult, SelectionMethod,
};
pub use decomposition::{EigenPair, PcaAlgorithms, PcaOptions, PcaResult};
pub use error::{Error, Result};
pub use matrix::{from_rows, Matrix};
pub use preprocess::{preprocess, FeatureSchema, Preprocessed, Record, Value};
pub use runtime::{CancellationToken, CpuClient, RuntimeClient};
