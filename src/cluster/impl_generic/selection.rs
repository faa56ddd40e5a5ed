//! Generic cluster count selection.

use tracing::{debug, info, warn};

use crate::cluster::impl_generic::kmeans::kmeans_impl;
use crate::cluster::impl_generic::metrics::silhouette_score_impl;
use crate::cluster::traits::kmeans::KMeansOptions;
use crate::cluster::traits::selection::{OptimalKOptions, OptimalKResult, SelectionMethod};
use crate::cluster::validation::{validate_data, validate_max_k};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::runtime::RuntimeClient;

/// Elbow pick: the k at the largest second difference of the scores.
///
/// `scores[i]` belongs to k = i + 2 and the pick is reported as
/// `argmax + 2`. With fewer than three scores there is no second difference
/// and the smallest candidate, 2, is returned. Ties keep the first index.
pub fn elbow_k(scores: &[f64]) -> usize {
    let first: Vec<f64> = scores.windows(2).map(|w| w[1] - w[0]).collect();
    let second: Vec<f64> = first.windows(2).map(|w| w[1] - w[0]).collect();
    argmax(&second).map_or(2, |i| i + 2)
}

/// Silhouette pick: the k with the highest score, first one on ties.
pub fn silhouette_k(scores: &[f64]) -> Option<usize> {
    argmax(scores).map(|i| i + 2)
}

fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if v <= b => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Generic k sweep.
pub fn find_optimal_k_impl<C>(
    client: &C,
    data: &Matrix,
    options: &OptimalKOptions,
) -> Result<OptimalKResult>
where
    C: RuntimeClient,
{
    validate_max_k(options.max_k, "find_optimal_k")?;
    validate_data(data, "find_optimal_k")?;

    let n = data.nrows();
    let max_k = options.max_k.min(n);
    if max_k < options.max_k {
        warn!(max_k = options.max_k, n, "max_k capped at the number of rows");
    }

    let mut k_values = Vec::new();
    let mut scores = Vec::new();
    for k in 2..=max_k {
        client.check_cancelled("find_optimal_k")?;

        let run = KMeansOptions {
            n_clusters: k,
            ..options.kmeans.clone()
        };
        let result = kmeans_impl(client, data, &run)?;
        let score = match options.method {
            SelectionMethod::Elbow => result.inertia,
            SelectionMethod::Silhouette => silhouette_score_impl(client, data, &result.labels)?,
        };
        debug!(k, score, method = ?options.method, "find_optimal_k step");

        k_values.push(k);
        scores.push(score);
    }

    let recommended_k = if scores.is_empty() {
        None
    } else {
        match options.method {
            SelectionMethod::Elbow => Some(elbow_k(&scores)),
            SelectionMethod::Silhouette => silhouette_k(&scores),
        }
    };
    info!(method = ?options.method, ?recommended_k, "find_optimal_k complete");

    Ok(OptimalKResult {
        method: options.method,
        k_values,
        scores,
        recommended_k,
    })
}
