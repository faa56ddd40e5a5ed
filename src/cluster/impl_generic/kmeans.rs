//! Generic K-Means clustering implementation.
//!
//! k-means++ seeding followed by Lloyd iterations until no label changes or
//! `max_iter` is reached.

use ndarray::ArrayView1;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::cluster::traits::kmeans::{EmptyClusterPolicy, KMeansOptions, KMeansResult};
use crate::cluster::validation::{
    validate_centroids, validate_data, validate_max_iter, validate_n_clusters,
};
use crate::error::Result;
use crate::matrix::{euclidean, squared_euclidean, Matrix};
use crate::runtime::RuntimeClient;

/// Index of the first weight whose running sum reaches `threshold`.
///
/// Zero weights are never picked. Falls back to the last positive weight
/// when rounding leaves the threshold just above the total.
fn weighted_index(weights: &[f64], threshold: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            cumulative += w;
            last = i;
            if cumulative >= threshold {
                return i;
            }
        }
    }
    last
}

/// K-Means++ initialization: pick centroids with probability proportional to D^2.
fn kmeans_plusplus_init<C>(client: &C, data: &Matrix, k: usize) -> Matrix
where
    C: RuntimeClient,
{
    let (n, d) = data.dim();
    let mut centroids = Matrix::zeros((k, d));

    let first = client.with_rng(|rng| rng.gen_range(0..n));
    centroids.row_mut(0).assign(&data.row(first));

    // Squared distance from each point to its nearest chosen centroid.
    let mut nearest: Vec<f64> = data
        .rows()
        .into_iter()
        .map(|p| squared_euclidean(p, data.row(first)))
        .collect();

    for c in 1..k {
        let total: f64 = nearest.iter().sum();
        let next = if total > 0.0 {
            let threshold = client.with_rng(|rng| rng.gen::<f64>()) * total;
            weighted_index(&nearest, threshold)
        } else {
            // Every point sits on a chosen centroid.
            client.with_rng(|rng| rng.gen_range(0..n))
        };
        centroids.row_mut(c).assign(&data.row(next));

        for (dist, p) in nearest.iter_mut().zip(data.rows()) {
            *dist = dist.min(squared_euclidean(p, data.row(next)));
        }
    }

    centroids
}

/// Nearest centroid by Euclidean distance; ties go to the lowest index.
fn nearest_centroid(point: ArrayView1<f64>, centroids: &Matrix) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, centroid) in centroids.rows().into_iter().enumerate() {
        let dist = euclidean(point, centroid);
        if dist < best_dist {
            best = j;
            best_dist = dist;
        }
    }
    best
}

/// Assign step. Returns whether any label changed.
fn assign_labels(data: &Matrix, centroids: &Matrix, labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (label, point) in labels.iter_mut().zip(data.rows()) {
        let nearest = nearest_centroid(point, centroids);
        if *label != nearest {
            *label = nearest;
            changed = true;
        }
    }
    changed
}

/// Update step. Returns the clusters that received no points.
fn update_centroids(
    data: &Matrix,
    labels: &[usize],
    centroids: &mut Matrix,
    policy: EmptyClusterPolicy,
) -> Vec<usize> {
    let k = centroids.nrows();
    let mut sums = Matrix::zeros(centroids.raw_dim());
    let mut counts = vec![0usize; k];
    for (point, &label) in data.rows().into_iter().zip(labels) {
        let mut sum = sums.row_mut(label);
        sum += &point;
        counts[label] += 1;
    }

    let mut empty = Vec::new();
    for (j, &count) in counts.iter().enumerate() {
        if count > 0 {
            centroids.row_mut(j).assign(&(&sums.row(j) / count as f64));
        } else {
            empty.push(j);
        }
    }

    if policy == EmptyClusterPolicy::ReseedFarthest && !empty.is_empty() {
        reseed_farthest(data, labels, centroids, &empty);
    }
    empty
}

/// Move each empty centroid onto the point farthest from its own centroid.
fn reseed_farthest(data: &Matrix, labels: &[usize], centroids: &mut Matrix, empty: &[usize]) {
    let mut dists: Vec<(usize, f64)> = data
        .rows()
        .into_iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (p, &l))| (i, euclidean(p, centroids.row(l))))
        .collect();
    // Farthest first; stable so equal distances keep row order.
    dists.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (&cluster, &(row, dist)) in empty.iter().zip(&dists) {
        if dist <= 0.0 {
            break;
        }
        debug!(cluster, row, dist, "reseeding empty cluster");
        centroids.row_mut(cluster).assign(&data.row(row));
    }
}

/// Generic K-Means implementation.
pub fn kmeans_impl<C>(client: &C, data: &Matrix, options: &KMeansOptions) -> Result<KMeansResult>
where
    C: RuntimeClient,
{
    validate_data(data, "kmeans")?;
    validate_max_iter(options.max_iter, "kmeans")?;
    let (n, d) = data.dim();
    let k = options.n_clusters;

    if n == 0 {
        validate_n_clusters(k, k, "kmeans")?;
        return Ok(KMeansResult {
            centroids: Matrix::zeros((0, d)),
            labels: Vec::new(),
            inertia: 0.0,
            n_iter: 0,
            converged: true,
        });
    }
    validate_n_clusters(k, n, "kmeans")?;

    let mut centroids = kmeans_plusplus_init(client, data, k);
    // No point starts assigned, so the first assign step always counts as a change.
    let mut labels = vec![usize::MAX; n];
    let mut n_iter = 0;
    let mut converged = false;

    while n_iter < options.max_iter {
        client.check_cancelled("kmeans")?;
        n_iter += 1;

        if !assign_labels(data, &centroids, &mut labels) {
            converged = true;
            break;
        }
        let empty = update_centroids(data, &labels, &mut centroids, options.empty_cluster);
        if !empty.is_empty() {
            debug!(iteration = n_iter, ?empty, "clusters without points");
        }
    }

    let inertia = labels
        .iter()
        .zip(data.rows())
        .map(|(&l, p)| options.inertia.distance(p, centroids.row(l)))
        .sum();

    let result = KMeansResult {
        centroids,
        labels,
        inertia,
        n_iter,
        converged,
    };

    let unused = result.cluster_sizes().iter().filter(|&&s| s == 0).count();
    if unused > 0 {
        warn!(k, unused, "kmeans finished with empty clusters");
    }
    info!(k, n, n_iter, converged, inertia, "kmeans complete");

    Ok(result)
}

/// Predict cluster assignments for new data.
pub fn kmeans_predict_impl<C>(client: &C, centroids: &Matrix, data: &Matrix) -> Result<Vec<usize>>
where
    C: RuntimeClient,
{
    client.check_cancelled("kmeans_predict")?;
    validate_data(data, "kmeans_predict")?;
    if data.nrows() == 0 {
        return Ok(Vec::new());
    }
    validate_centroids(centroids, data.ncols(), "kmeans_predict")?;

    Ok(data
        .rows()
        .into_iter()
        .map(|p| nearest_centroid(p, centroids))
        .collect())
}
