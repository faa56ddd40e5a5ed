//! CPU implementation of cluster evaluation metrics.

use ndarray::Array1;

use crate::cluster::impl_generic::{silhouette_samples_impl, silhouette_score_impl};
use crate::cluster::traits::metrics::ClusterMetricsAlgorithms;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::runtime::CpuClient;

impl ClusterMetricsAlgorithms for CpuClient {
    fn silhouette_score(&self, data: &Matrix, labels: &[usize]) -> Result<f64> {
        silhouette_score_impl(self, data, labels)
    }

    fn silhouette_samples(&self, data: &Matrix, labels: &[usize]) -> Result<Array1<f64>> {
        silhouette_samples_impl(self, data, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::from_rows;
    use crate::runtime::CancellationToken;
    use crate::Error;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn setup() -> CpuClient {
        CpuClient::with_seed(42)
    }

    #[test]
    fn test_silhouette_well_separated() {
        let client = setup();
        let data = from_rows(&[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ])
        .unwrap();

        let score = client.silhouette_score(&data, &[0, 0, 1, 1]).unwrap();
        assert!(score > 0.9, "score = {score}");

        // a = 1, b = (10 + sqrt(101)) / 2 for every point.
        let b = (10.0 + 101f64.sqrt()) / 2.0;
        let expected = (b - 1.0) / b;
        let samples = client.silhouette_samples(&data, &[0, 0, 1, 1]).unwrap();
        for s in samples.iter() {
            assert!((s - expected).abs() < 1e-12, "sample {s} != {expected}");
        }
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_silhouette_bad_partition_is_negative() {
        let client = setup();
        let data = from_rows(&[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ])
        .unwrap();
        let score = client.silhouette_score(&data, &[0, 1, 0, 1]).unwrap();
        assert!(score < 0.0, "score = {score}");
    }

    #[test]
    fn test_silhouette_singleton_cluster() {
        let client = setup();
        let data = from_rows(&[vec![0.0], vec![1.0], vec![5.0]]).unwrap();
        let samples = client.silhouette_samples(&data, &[0, 0, 1]).unwrap();
        // A point alone in its cluster has a = 0, so s = 1.
        assert_eq!(samples[2], 1.0);
    }

    #[test]
    fn test_silhouette_arbitrary_label_values() {
        let client = setup();
        let data = from_rows(&[vec![0.0], vec![1.0], vec![9.0], vec![10.0]]).unwrap();
        let dense = client.silhouette_score(&data, &[0, 0, 1, 1]).unwrap();
        let sparse = client.silhouette_score(&data, &[7, 7, 3, 3]).unwrap();
        assert!((dense - sparse).abs() < 1e-12);
    }

    #[test]
    fn test_silhouette_degenerate_inputs_score_zero() {
        let client = setup();
        let data = from_rows(&[vec![0.0], vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(client.silhouette_score(&data, &[4, 4, 4]).unwrap(), 0.0);

        let one = from_rows(&[vec![3.0]]).unwrap();
        assert_eq!(client.silhouette_score(&one, &[0]).unwrap(), 0.0);

        assert_eq!(client.silhouette_score(&Matrix::zeros((0, 2)), &[]).unwrap(), 0.0);

        // All points identical with two labels: a = b = 0.
        let same = from_rows(&[vec![1.0], vec![1.0], vec![1.0]]).unwrap();
        assert_eq!(client.silhouette_score(&same, &[0, 1, 1]).unwrap(), 0.0);
    }

    #[test]
    fn test_silhouette_bounds_on_random_partitions() {
        let client = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..10 {
            let rows: Vec<Vec<f64>> = (0..25)
                .map(|_| (0..3).map(|_| rng.gen_range(-5.0..5.0)).collect())
                .collect();
            let data = from_rows(&rows).unwrap();
            let labels: Vec<usize> = (0..25).map(|_| rng.gen_range(0..4)).collect();

            let samples = client.silhouette_samples(&data, &labels).unwrap();
            assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
            let score = client.silhouette_score(&data, &labels).unwrap();
            assert!((-1.0..=1.0).contains(&score), "score = {score}");
        }
    }

    #[test]
    fn test_silhouette_label_length_mismatch() {
        let client = setup();
        let data = from_rows(&[vec![0.0], vec![1.0]]).unwrap();
        assert!(client.silhouette_score(&data, &[0]).is_err());
    }

    #[test]
    fn test_silhouette_cancelled() {
        let token = CancellationToken::new();
        let client = setup().with_cancellation(token.clone());
        let data = from_rows(&[vec![0.0], vec![1.0], vec![9.0], vec![10.0]]).unwrap();
        assert!(client.silhouette_score(&data, &[0, 0, 1, 1]).is_ok());

        token.cancel();
        assert_eq!(
            client.silhouette_score(&data, &[0, 0, 1, 1]),
            Err(Error::Cancelled { op: "silhouette" })
        );
        assert_eq!(
            client.silhouette_samples(&data, &[0, 0, 1, 1]),
            Err(Error::Cancelled { op: "silhouette" })
        );
    }
}
