//! Principal component analysis trait.

use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Options for PCA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcaOptions {
    /// Number of components to keep. `None` keeps all `d`.
    pub n_components: Option<usize>,
    /// Power-iteration steps per component.
    pub max_iter: usize,
    /// Early-stop tolerance on `1 - |cos θ|` between successive iterates.
    /// `None` always runs `max_iter` steps.
    pub tol: Option<f64>,
}

impl Default for PcaOptions {
    fn default() -> Self {
        Self {
            n_components: None,
            max_iter: 30,
            tol: None,
        }
    }
}

impl PcaOptions {
    /// Keep `k` components, other options at their defaults.
    pub fn with_components(k: usize) -> Self {
        Self {
            n_components: Some(k),
            ..Default::default()
        }
    }
}

/// An eigenvalue and its unit-length eigenvector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenPair {
    pub eigenvalue: f64,
    pub eigenvector: Array1<f64>,
}

/// Result of PCA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcaResult {
    /// Centered data projected on the components [n, k].
    pub projected: Matrix,
    /// Share of total variance per component, descending.
    pub explained_variance_ratio: Vec<f64>,
    /// Principal axes as rows [k, d].
    pub components: Matrix,
    /// Covariance eigenvalues of the components, descending.
    pub eigenvalues: Vec<f64>,
    /// Column means used for centering [d].
    pub mean: Array1<f64>,
}

impl PcaResult {
    /// Number of kept components.
    pub fn n_components(&self) -> usize {
        self.components.nrows()
    }

    /// Running sum of [`PcaResult::explained_variance_ratio`].
    pub fn cumulative_variance(&self) -> Vec<f64> {
        self.explained_variance_ratio
            .iter()
            .scan(0.0, |acc, r| {
                *acc += r;
                Some(*acc)
            })
            .collect()
    }

    /// Components paired with their eigenvalues.
    pub fn eigenpairs(&self) -> Vec<EigenPair> {
        self.eigenvalues
            .iter()
            .zip(self.components.axis_iter(Axis(0)))
            .map(|(&eigenvalue, v)| EigenPair {
                eigenvalue,
                eigenvector: v.to_owned(),
            })
            .collect()
    }

    /// Project new rows with the fitted mean and components.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        if data.ncols() != self.mean.len() {
            return Err(Error::DimensionMismatch {
                expected: self.mean.len(),
                got: data.ncols(),
                context: "pca transform",
            });
        }
        Ok((data - &self.mean).dot(&self.components.t()))
    }
}

/// Principal component analysis.
pub trait PcaAlgorithms {
    /// Fit PCA on `data` [n, d] and project it on the top components.
    fn pca(&self, data: &Matrix, options: &PcaOptions) -> Result<PcaResult>;
}
