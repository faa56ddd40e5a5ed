//! Dense numeric matrix type and row-wise constructors.
//!
//! Every algorithm in the crate works on [`Matrix`], an `ndarray::Array2<f64>`
//! with one row per record and one column per feature. Row order is the
//! record order and is preserved by every operation.

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};

/// Row-major dense matrix of `f64`, shape `[n, d]`.
pub type Matrix = Array2<f64>;

/// Build a matrix from row vectors.
///
/// Fails with [`Error::RaggedMatrix`] when any row differs in length from the
/// first one, and with [`Error::InvalidArgument`] when a cell is not finite.
/// An empty slice yields a `[0, 0]` matrix.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let n = rows.len();
    let d = rows.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(n * d);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != d {
            return Err(Error::RaggedMatrix {
                row,
                expected: d,
                got: values.len(),
            });
        }
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::invalid(
                "rows",
                format!("non-finite value {} at row {row}, column {col}", values[col]),
            ));
        }
        flat.extend_from_slice(values);
    }

    Array2::from_shape_vec((n, d), flat).map_err(|e| Error::invalid("rows", e.to_string()))
}

/// Reject matrices holding NaN or infinite cells.
pub fn validate_finite(data: &Matrix, op: &'static str) -> Result<()> {
    match data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), v)) => Err(Error::invalid(
            "data",
            format!("{op}: non-finite value {v} at row {row}, column {col}"),
        )),
        None => Ok(()),
    }
}

/// Convert a matrix back to row vectors.
pub fn to_rows(data: &Matrix) -> Vec<Vec<f64>> {
    data.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Squared Euclidean distance between two rows.
#[inline]
pub fn squared_euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Euclidean distance between two rows.
#[inline]
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    squared_euclidean(a, b).sqrt()
}
