//! Column standardisation to zero mean and unit variance.

use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Per-column mean and scale of a fitted standardiser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Array1<f64>,
    /// Population standard deviation; 1 for constant columns.
    pub scale: Array1<f64>,
}

impl StandardScaler {
    /// Fit column statistics. The standard deviation divides by the row
    /// count, and a zero deviation is replaced by 1.
    pub fn fit(data: &Matrix) -> Self {
        let d = data.ncols();
        if data.nrows() == 0 {
            return Self {
                mean: Array1::zeros(d),
                scale: Array1::ones(d),
            };
        }
        let mean = data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(d));
        let scale = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s == 0.0 { 1.0 } else { s });
        Self { mean, scale }
    }

    /// Apply `(x - mean) / scale` column-wise.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        if data.ncols() != self.mean.len() {
            return Err(Error::DimensionMismatch {
                expected: self.mean.len(),
                got: data.ncols(),
                context: "standardize",
            });
        }
        Ok((data - &self.mean) / &self.scale)
    }
}

/// Standardise every column of `data`.
///
/// Constant columns become all zeros. An empty matrix is returned as is.
pub fn standardize(data: &Matrix) -> Matrix {
    if data.is_empty() {
        return data.clone();
    }
    let scaler = StandardScaler::fit(data);
    (data - &scaler.mean) / &scaler.scale
}
