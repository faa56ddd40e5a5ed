//! Validation helpers for clustering algorithms.

use crate::error::{Error, Result};
use crate::matrix::{validate_finite, Matrix};

/// Validate that data holds only finite values.
pub fn validate_data(data: &Matrix, op: &'static str) -> Result<()> {
    validate_finite(data, op)
}

/// Validate n_clusters parameter.
pub fn validate_n_clusters(n_clusters: usize, n_points: usize, op: &'static str) -> Result<()> {
    if n_clusters == 0 {
        return Err(Error::invalid("n_clusters", format!("{op} requires n_clusters > 0")));
    }
    if n_clusters > n_points {
        return Err(Error::invalid(
            "n_clusters",
            format!("{op}: n_clusters={n_clusters} exceeds number of points {n_points}"),
        ));
    }
    Ok(())
}

/// Validate max_iter parameter.
pub fn validate_max_iter(max_iter: usize, op: &'static str) -> Result<()> {
    if max_iter == 0 {
        return Err(Error::invalid("max_iter", format!("{op} requires max_iter > 0")));
    }
    Ok(())
}

/// Validate max_k parameter of a k sweep.
pub fn validate_max_k(max_k: usize, op: &'static str) -> Result<()> {
    if max_k < 2 {
        return Err(Error::invalid(
            "max_k",
            format!("{op} requires max_k >= 2, got {max_k}"),
        ));
    }
    Ok(())
}

/// Validate that there is one label per data row.
pub fn validate_labels(labels: &[usize], n_points: usize, op: &'static str) -> Result<()> {
    if labels.len() != n_points {
        return Err(Error::invalid(
            "labels",
            format!("{op}: got {} labels for {n_points} points", labels.len()),
        ));
    }
    Ok(())
}

/// Validate centroids against the width of the data they label.
pub fn validate_centroids(centroids: &Matrix, n_features: usize, op: &'static str) -> Result<()> {
    if centroids.nrows() == 0 {
        return Err(Error::invalid("centroids", format!("{op} requires at least 1 centroid")));
    }
    if centroids.ncols() != n_features {
        return Err(Error::DimensionMismatch {
            expected: centroids.ncols(),
            got: n_features,
            context: op,
        });
    }
    validate_finite(centroids, op)
}
