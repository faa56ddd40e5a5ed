//! CPU implementation of cluster count selection.

use crate::cluster::impl_generic::find_optimal_k_impl;
use crate::cluster::traits::selection::{
    ClusterSelectionAlgorithms, OptimalKOptions, OptimalKResult,
};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::runtime::CpuClient;

impl ClusterSelectionAlgorithms for CpuClient {
    fn find_optimal_k(&self, data: &Matrix, options: &OptimalKOptions) -> Result<OptimalKResult> {
        find_optimal_k_impl(self, data, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::impl_generic::elbow_k;
    use crate::cluster::traits::selection::SelectionMethod;
    use crate::matrix::from_rows;
    use crate::runtime::CancellationToken;
    use crate::Error;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal};

    fn setup() -> CpuClient {
        CpuClient::with_seed(42)
    }

    /// Three Gaussian blobs of 30 points, spread 1, centers 20 apart.
    fn three_blobs() -> Matrix {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let centers = [(0.0, 0.0), (20.0, 0.0), (10.0, 20.0)];
        let rows: Vec<Vec<f64>> = centers
            .iter()
            .flat_map(|&(cx, cy)| {
                (0..30)
                    .map(|_| vec![cx + noise.sample(&mut rng), cy + noise.sample(&mut rng)])
                    .collect::<Vec<_>>()
            })
            .collect();
        from_rows(&rows).unwrap()
    }

    #[test]
    fn test_find_optimal_k_silhouette_three_blobs() {
        let client = setup();
        let options = OptimalKOptions {
            max_k: 6,
            method: SelectionMethod::Silhouette,
            ..Default::default()
        };
        let result = client.find_optimal_k(&three_blobs(), &options).unwrap();
        assert_eq!(result.k_values, vec![2, 3, 4, 5, 6]);
        assert_eq!(result.scores.len(), 5);
        assert_eq!(result.recommended_k, Some(3), "scores = {:?}", result.scores);
    }

    #[test]
    fn test_find_optimal_k_elbow() {
        let client = setup();
        let options = OptimalKOptions {
            max_k: 6,
            method: SelectionMethod::Elbow,
            ..Default::default()
        };
        let result = client.find_optimal_k(&three_blobs(), &options).unwrap();
        assert_eq!(result.method, SelectionMethod::Elbow);
        assert!(result.scores.iter().all(|&s| s >= 0.0));
        assert_eq!(result.recommended_k, Some(elbow_k(&result.scores)));
    }

    #[test]
    fn test_find_optimal_k_caps_at_row_count() {
        let client = setup();
        let data = from_rows(&[vec![0.0], vec![1.0], vec![5.0]]).unwrap();
        let result = client.find_optimal_k(&data, &OptimalKOptions::default()).unwrap();
        assert_eq!(result.k_values, vec![2, 3]);
        assert!(result.recommended_k.is_some());
    }

    #[test]
    fn test_find_optimal_k_too_few_rows() {
        let client = setup();
        let data = from_rows(&[vec![1.0, 2.0]]).unwrap();
        let result = client.find_optimal_k(&data, &OptimalKOptions::default()).unwrap();
        assert!(result.scores.is_empty());
        assert_eq!(result.recommended_k, None);
    }

    #[test]
    fn test_find_optimal_k_invalid_max_k() {
        let client = setup();
        let options = OptimalKOptions {
            max_k: 1,
            ..Default::default()
        };
        assert!(client.find_optimal_k(&three_blobs(), &options).is_err());
    }

    #[test]
    fn test_options_from_config() {
        let json = r#"{"max_k": 6, "method": "silhouette", "kmeans": {"inertia": "squared_euclidean"}}"#;
        let options: OptimalKOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.max_k, 6);
        assert_eq!(options.method, SelectionMethod::Silhouette);
        assert_eq!(
            options.kmeans.inertia,
            crate::cluster::InertiaMetric::SquaredEuclidean
        );
        assert_eq!(options.kmeans.max_iter, 100);

        let defaults: OptimalKOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, OptimalKOptions::default());
    }

    #[test]
    fn test_find_optimal_k_cancelled() {
        let token = CancellationToken::new();
        let client = setup().with_cancellation(token.clone());
        token.cancel();
        assert_eq!(
            client.find_optimal_k(&three_blobs(), &OptimalKOptions::default()),
            Err(Error::Cancelled {
                op: "find_optimal_k"
            })
        );
    }
}
