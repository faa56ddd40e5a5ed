//! Per-cluster summaries of a labelled matrix.

use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};

use crate::cluster::validation::{validate_data, validate_labels};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Summary of one cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterProfile {
    pub cluster: usize,
    /// Rows assigned to the cluster.
    pub size: usize,
    /// `size / n`.
    pub share: f64,
    /// Column means over the cluster's rows; zeros for an empty cluster.
    pub feature_means: Array1<f64>,
    /// Mean of the observed outcomes in the cluster, when outcomes were given
    /// and at least one was observed.
    pub outcome_rate: Option<f64>,
}

/// Profile clusters `0..k` of `data` under `labels`.
///
/// `outcomes` holds one optional outcome per row, for example
/// [`Preprocessed::outcomes`](crate::preprocess::Preprocessed::outcomes).
/// Clusters with no rows are reported with size 0.
pub fn cluster_profiles(
    data: &Matrix,
    labels: &[usize],
    k: usize,
    outcomes: Option<&[Option<i64>]>,
) -> Result<Vec<ClusterProfile>> {
    validate_data(data, "cluster_profiles")?;
    let (n, d) = data.dim();
    validate_labels(labels, n, "cluster_profiles")?;
    if let Some(&label) = labels.iter().find(|&&l| l >= k) {
        return Err(Error::invalid(
            "labels",
            format!("cluster_profiles: label {label} is not below k={k}"),
        ));
    }
    if let Some(outcomes) = outcomes {
        if outcomes.len() != n {
            return Err(Error::invalid(
                "outcomes",
                format!("cluster_profiles: got {} outcomes for {n} rows", outcomes.len()),
            ));
        }
    }

    let profiles = (0..k)
        .map(|cluster| {
            let rows: Vec<usize> = (0..n).filter(|&i| labels[i] == cluster).collect();
            let size = rows.len();
            let share = if n > 0 { size as f64 / n as f64 } else { 0.0 };
            let feature_means = data
                .select(Axis(0), &rows)
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(d));
            let outcome_rate = outcomes.and_then(|outcomes| {
                let observed: Vec<f64> = rows
                    .iter()
                    .filter_map(|&i| outcomes[i])
                    .map(|o| o as f64)
                    .collect();
                (!observed.is_empty())
                    .then(|| observed.iter().sum::<f64>() / observed.len() as f64)
            });
            ClusterProfile {
                cluster,
                size,
                share,
                feature_means,
                outcome_rate,
            }
        })
        .collect();

    Ok(profiles)
}
