//! CPU implementation of PCA.

use crate::decomposition::impl_generic::pca_impl;
use crate::decomposition::traits::pca::{PcaAlgorithms, PcaOptions, PcaResult};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::runtime::CpuClient;

impl PcaAlgorithms for CpuClient {
    fn pca(&self, data: &Matrix, options: &PcaOptions) -> Result<PcaResult> {
        pca_impl(self, data, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::from_rows;
    use crate::runtime::CancellationToken;
    use crate::Error;

    fn setup() -> CpuClient {
        CpuClient::with_seed(42)
    }

    /// Six points whose covariance is diag(3.6, 1.6, 0.4).
    fn axis_data() -> Matrix {
        #[rustfmt::skip]
        let rows = vec![
            vec![ 3.0,  0.0,  0.0],
            vec![-3.0,  0.0,  0.0],
            vec![ 0.0,  2.0,  0.0],
            vec![ 0.0, -2.0,  0.0],
            vec![ 0.0,  0.0,  1.0],
            vec![ 0.0,  0.0, -1.0],
        ];
        from_rows(&rows).unwrap()
    }

    #[test]
    fn test_pca_axis_aligned_eigenpairs() {
        let client = setup();
        let result = client.pca(&axis_data(), &PcaOptions::default()).unwrap();

        let expected = [3.6, 1.6, 0.4];
        for (got, want) in result.eigenvalues.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "eigenvalue {got} != {want}");
        }
        for (i, pair) in result.eigenpairs().iter().enumerate() {
            let norm = pair.eigenvector.dot(&pair.eigenvector).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
            assert!(pair.eigenvector[i].abs() > 1.0 - 1e-6);
        }

        let ratios = &result.explained_variance_ratio;
        assert!((ratios[0] - 3.6 / 5.6).abs() < 1e-6);
        assert!((ratios[2] - 0.4 / 5.6).abs() < 1e-6);
    }

    #[test]
    fn test_pca_full_rank_ratios_sum_to_one() {
        let client = setup();
        #[rustfmt::skip]
        let data = from_rows(&[
            vec![2.5, 2.4, 0.5, 1.0],
            vec![0.5, 0.7, 1.5, 0.2],
            vec![2.2, 2.9, 0.1, 0.9],
            vec![1.9, 2.2, 0.8, 0.4],
            vec![3.1, 3.0, 0.3, 1.3],
            vec![2.3, 2.7, 1.1, 0.6],
            vec![2.0, 1.6, 0.9, 0.8],
            vec![1.0, 1.1, 1.9, 0.1],
        ])
        .unwrap();

        let result = client.pca(&data, &PcaOptions::default()).unwrap();
        assert_eq!(result.n_components(), 4);
        let sum: f64 = result.explained_variance_ratio.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "ratios sum to {sum}");
        assert!(result
            .eigenvalues
            .windows(2)
            .all(|w| w[0] >= w[1]));
        let cumulative = result.cumulative_variance();
        assert!((cumulative[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pca_truncated_projection() {
        let client = setup();
        // Points along y = x with a little orthogonal spread.
        #[rustfmt::skip]
        let data = from_rows(&[
            vec![0.0, 0.1],
            vec![1.0, 0.9],
            vec![2.0, 2.1],
            vec![3.0, 2.9],
            vec![4.0, 4.1],
        ])
        .unwrap();

        let result = client.pca(&data, &PcaOptions::with_components(1)).unwrap();
        assert_eq!(result.projected.shape(), &[5, 1]);
        assert_eq!(result.components.shape(), &[1, 2]);

        let axis = result.components.row(0);
        let alignment = (axis[0] + axis[1]).abs() / 2f64.sqrt();
        assert!(alignment > 0.999, "first axis {axis:?} not along y = x");

        let ratio = result.explained_variance_ratio[0];
        assert!(ratio > 0.99 && ratio <= 1.0, "ratio = {ratio}");

        // Projecting the training rows again reproduces `projected`.
        let again = result.transform(&data).unwrap();
        for (a, b) in again.iter().zip(result.projected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!(result.transform(&Matrix::zeros((1, 3))).is_err());
    }

    #[test]
    fn test_pca_seeded_runs_are_identical() {
        let data = axis_data();
        let a = CpuClient::with_seed(9).pca(&data, &PcaOptions::default()).unwrap();
        let b = CpuClient::with_seed(9).pca(&data, &PcaOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pca_tolerance_stops_early_with_same_answer() {
        let client = setup();
        let fixed = client.pca(&axis_data(), &PcaOptions::default()).unwrap();
        let options = PcaOptions {
            max_iter: 500,
            tol: Some(1e-14),
            ..Default::default()
        };
        let early = client.pca(&axis_data(), &options).unwrap();
        for (a, b) in fixed.eigenvalues.iter().zip(&early.eigenvalues) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pca_empty_inputs() {
        let client = setup();

        let result = client.pca(&Matrix::zeros((0, 3)), &PcaOptions::default()).unwrap();
        assert_eq!(result.projected.shape(), &[0, 0]);
        assert!(result.explained_variance_ratio.is_empty());

        let result = client.pca(&Matrix::zeros((4, 0)), &PcaOptions::default()).unwrap();
        assert_eq!(result.projected.shape(), &[4, 0]);
        assert!(result.components.is_empty());
    }

    #[test]
    fn test_pca_constant_data() {
        let client = setup();
        let data = from_rows(&[vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0, 2.0]]).unwrap();
        let result = client.pca(&data, &PcaOptions::default()).unwrap();
        assert!(result.explained_variance_ratio.iter().all(|&r| r == 0.0));
        assert!(result.projected.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_pca_invalid_options() {
        let client = setup();
        let data = axis_data();
        assert!(client.pca(&data, &PcaOptions::with_components(4)).is_err());
        assert!(client.pca(&data, &PcaOptions::with_components(0)).is_err());
        let options = PcaOptions {
            tol: Some(-1.0),
            ..Default::default()
        };
        assert!(client.pca(&data, &options).is_err());

        let mut bad = data.clone();
        bad[[0, 0]] = f64::NAN;
        assert!(client.pca(&bad, &PcaOptions::default()).is_err());
    }

    #[test]
    fn test_pca_options_from_config() {
        let options: PcaOptions = serde_json::from_str(r#"{"n_components": 2}"#).unwrap();
        assert_eq!(options, PcaOptions::with_components(2));

        let options: PcaOptions = serde_json::from_str(r#"{"max_iter": 200, "tol": 1e-9}"#).unwrap();
        assert_eq!(options.n_components, None);
        assert_eq!(options.tol, Some(1e-9));
    }

    #[test]
    fn test_pca_cancelled() {
        let token = CancellationToken::new();
        let client = setup().with_cancellation(token.clone());
        token.cancel();
        assert_eq!(
            client.pca(&axis_data(), &PcaOptions::default()),
            Err(Error::Cancelled { op: "pca" })
        );
    }
}
