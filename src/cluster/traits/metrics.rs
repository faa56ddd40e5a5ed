//! Cluster evaluation metrics trait.

use ndarray::Array1;

use crate::error::Result;
use crate::matrix::Matrix;

/// Cluster evaluation metrics.
///
/// Labels are arbitrary cluster ids, one per row; they need not be dense.
pub trait ClusterMetricsAlgorithms {
    /// Mean silhouette coefficient in `[-1, 1]`.
    ///
    /// 0 when there are fewer than 2 points or fewer than 2 distinct labels.
    fn silhouette_score(&self, data: &Matrix, labels: &[usize]) -> Result<f64>;

    /// Per-sample silhouette coefficients [n].
    fn silhouette_samples(&self, data: &Matrix, labels: &[usize]) -> Result<Array1<f64>>;
}
