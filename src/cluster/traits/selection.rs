//! Cluster count selection trait.

use serde::{Deserialize, Serialize};

use crate::cluster::traits::kmeans::KMeansOptions;
use crate::error::Result;
use crate::matrix::Matrix;

/// Score recorded for each candidate k.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// K-means inertia; k chosen by the largest second difference.
    #[default]
    Elbow,
    /// Mean silhouette; k chosen by the highest score.
    Silhouette,
}

/// Options for [`ClusterSelectionAlgorithms::find_optimal_k`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimalKOptions {
    /// Largest k tried. Capped at the number of rows.
    pub max_k: usize,
    /// Scoring method.
    pub method: SelectionMethod,
    /// K-means settings for every run; `n_clusters` is overridden per step.
    pub kmeans: KMeansOptions,
}

impl Default for OptimalKOptions {
    fn default() -> Self {
        Self {
            max_k: 10,
            method: SelectionMethod::Elbow,
            kmeans: KMeansOptions::default(),
        }
    }
}

/// Result of a k sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalKResult {
    pub method: SelectionMethod,
    /// Candidate k values, starting at 2.
    pub k_values: Vec<usize>,
    /// Score for each entry of `k_values`.
    pub scores: Vec<f64>,
    /// `None` when the data has fewer than 2 rows.
    pub recommended_k: Option<usize>,
}

/// Cluster count selection.
pub trait ClusterSelectionAlgorithms {
    /// Run K-means for k = 2..=max_k and recommend a cluster count.
    fn find_optimal_k(&self, data: &Matrix, options: &OptimalKOptions) -> Result<OptimalKResult>;
}
