//! Generic cluster evaluation metrics implementation.

use ndarray::Array1;

use crate::cluster::validation::{validate_data, validate_labels};
use crate::error::Result;
use crate::matrix::{euclidean, Matrix};
use crate::runtime::RuntimeClient;

/// Silhouette of one point from its mean intra-cluster distance `a` and its
/// lowest mean distance to another cluster `b`.
///
/// a = b = 0 gives 0, a = 0 < b gives 1, b = 0 < a gives -1.
fn silhouette_value(a: f64, b: f64) -> f64 {
    let m = a.max(b);
    if m > 0.0 {
        (b - a) / m
    } else {
        0.0
    }
}

/// Compute per-sample silhouette coefficients.
///
/// All zeros when there are fewer than 2 points or fewer than 2 distinct
/// labels. O(n^2 d).
pub fn silhouette_samples_impl<C>(client: &C, data: &Matrix, labels: &[usize]) -> Result<Array1<f64>>
where
    C: RuntimeClient,
{
    validate_data(data, "silhouette_samples")?;
    let n = data.nrows();
    validate_labels(labels, n, "silhouette_samples")?;

    // Dense cluster index for each label value.
    let mut ids = labels.to_vec();
    ids.sort_unstable();
    ids.dedup();
    let m = ids.len();
    if n < 2 || m < 2 {
        return Ok(Array1::zeros(n));
    }
    let cluster: Vec<usize> = labels
        .iter()
        .map(|l| ids.partition_point(|id| id < l))
        .collect();
    let mut sizes = vec![0usize; m];
    for &c in &cluster {
        sizes[c] += 1;
    }

    let mut samples = Array1::zeros(n);
    let mut sums = vec![0.0; m];
    for i in 0..n {
        client.check_cancelled("silhouette")?;

        sums.iter_mut().for_each(|s| *s = 0.0);
        for j in 0..n {
            if i != j {
                sums[cluster[j]] += euclidean(data.row(i), data.row(j));
            }
        }

        let own = cluster[i];
        let a = if sizes[own] > 1 {
            sums[own] / (sizes[own] - 1) as f64
        } else {
            0.0
        };
        let b = (0..m)
            .filter(|&c| c != own)
            .map(|c| sums[c] / sizes[c] as f64)
            .fold(f64::INFINITY, f64::min);
        samples[i] = silhouette_value(a, b);
    }

    Ok(samples)
}

/// Mean silhouette coefficient.
pub fn silhouette_score_impl<C>(client: &C, data: &Matrix, labels: &[usize]) -> Result<f64>
where
    C: RuntimeClient,
{
    let samples = silhouette_samples_impl(client, data, labels)?;
    Ok(samples.mean().unwrap_or(0.0))
}
