//! K-Means clustering trait.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::{squared_euclidean, Matrix};

/// Distance summed into [`KMeansResult::inertia`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InertiaMetric {
    /// Sum of plain Euclidean distances to the assigned centroid (default).
    #[default]
    Euclidean,
    /// Sum of squared distances, the quantity Lloyd's update minimises.
    SquaredEuclidean,
}

impl InertiaMetric {
    /// Contribution of one point at `point` assigned to `centroid`.
    pub fn distance(self, point: ArrayView1<f64>, centroid: ArrayView1<f64>) -> f64 {
        let sq = squared_euclidean(point, centroid);
        match self {
            Self::Euclidean => sq.sqrt(),
            Self::SquaredEuclidean => sq,
        }
    }
}

/// What the update step does with a centroid that received no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Leave the centroid where it was (default). It may stay unused.
    #[default]
    KeepPrevious,
    /// Move the centroid onto the point farthest from its own centroid.
    ReseedFarthest,
}

/// Options for K-Means clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansOptions {
    /// Number of clusters.
    pub n_clusters: usize,
    /// Maximum Lloyd iterations.
    pub max_iter: usize,
    /// Metric reported as inertia.
    pub inertia: InertiaMetric,
    /// Handling of clusters left without points.
    pub empty_cluster: EmptyClusterPolicy,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            n_clusters: 8,
            max_iter: 100,
            inertia: InertiaMetric::Euclidean,
            empty_cluster: EmptyClusterPolicy::KeepPrevious,
        }
    }
}

impl KMeansOptions {
    /// `k` clusters, other options at their defaults.
    pub fn with_k(k: usize) -> Self {
        Self {
            n_clusters: k,
            ..Default::default()
        }
    }
}

/// Result of K-Means clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansResult {
    /// Cluster centroids [k, d].
    pub centroids: Matrix,
    /// Cluster index in `0..k` for each row.
    pub labels: Vec<usize>,
    /// Summed distance of each row to its centroid, see [`InertiaMetric`].
    pub inertia: f64,
    /// Number of iterations run.
    pub n_iter: usize,
    /// `true` when the last iteration changed no label, `false` when
    /// `max_iter` ran out first.
    pub converged: bool,
}

impl KMeansResult {
    /// Number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }

    /// Number of rows assigned to each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

/// K-Means clustering algorithms.
pub trait KMeansAlgorithms {
    /// Fit K-Means clustering to data [n, d].
    fn kmeans(&self, data: &Matrix, options: &KMeansOptions) -> Result<KMeansResult>;

    /// Predict cluster assignments for new data given centroids.
    fn kmeans_predict(&self, centroids: &Matrix, data: &Matrix) -> Result<Vec<usize>>;
}
