//! Generic PCA implementation.
//!
//! 1. Center the columns
//! 2. Sample covariance matrix [d, d]
//! 3. Eigenpairs by power iteration with deflation
//! 4. Sort descending, compute explained variance, project

use ndarray::{Array1, Axis};
use rand::Rng;
use tracing::{debug, info};

use crate::decomposition::traits::pca::{EigenPair, PcaOptions, PcaResult};
use crate::error::{Error, Result};
use crate::matrix::{validate_finite, Matrix};
use crate::runtime::RuntimeClient;

/// Sample covariance of already-centered data, `Xᵀ X / (n - 1)`.
///
/// A single row divides by 1 so the result is all zeros rather than NaN.
pub fn covariance_matrix(centered: &Matrix) -> Matrix {
    let d = centered.ncols();
    let denom = centered.nrows().saturating_sub(1).max(1) as f64;
    let mut cov = Matrix::zeros((d, d));
    for i in 0..d {
        for j in i..d {
            let v = centered.column(i).dot(&centered.column(j)) / denom;
            cov[[i, j]] = v;
            cov[[j, i]] = v;
        }
    }
    cov
}

/// Random vector on the unit sphere of dimension `d`.
fn random_unit_vector<G: Rng + ?Sized>(rng: &mut G, d: usize) -> Array1<f64> {
    let v: Array1<f64> = (0..d).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let norm = v.dot(&v).sqrt();
    if norm > 0.0 {
        v / norm
    } else {
        let mut e = Array1::zeros(d);
        e[0] = 1.0;
        e
    }
}

/// Top `k` eigenpairs of the symmetric matrix `matrix` by power iteration.
///
/// Each component starts from a random unit vector drawn from the client,
/// runs `max_iter` multiply-and-normalise steps (fewer when `tol` is set and
/// the direction stops moving), takes the Rayleigh quotient as eigenvalue and
/// deflates the working matrix by `λ v vᵀ`. Pairs are returned in extraction
/// order, not sorted.
pub fn power_iteration_impl<C>(
    client: &C,
    matrix: &Matrix,
    k: usize,
    max_iter: usize,
    tol: Option<f64>,
) -> Result<Vec<EigenPair>>
where
    C: RuntimeClient,
{
    let d = matrix.nrows();
    let mut working = matrix.clone();
    let mut pairs = Vec::with_capacity(k);

    for component in 0..k {
        client.check_cancelled("pca")?;

        let mut v = client.with_rng(|rng| random_unit_vector(rng, d));
        let mut steps = 0;
        for _ in 0..max_iter {
            let w = working.dot(&v);
            let norm = w.dot(&w).sqrt();
            if norm == 0.0 {
                // Working matrix annihilates v: remaining eigenvalues are 0.
                break;
            }
            let next = w / norm;
            let settled = tol.is_some_and(|t| 1.0 - next.dot(&v).abs() < t);
            v = next;
            steps += 1;
            if settled {
                break;
            }
        }

        let eigenvalue = v.dot(&working.dot(&v));
        let col = v.view().insert_axis(Axis(1));
        let row = v.view().insert_axis(Axis(0));
        working.scaled_add(-eigenvalue, &col.dot(&row));

        debug!(component, eigenvalue, steps, "power iteration");
        pairs.push(EigenPair {
            eigenvalue,
            eigenvector: v,
        });
    }

    Ok(pairs)
}

fn validate_pca_options(options: &PcaOptions, d: usize) -> Result<usize> {
    if options.max_iter == 0 {
        return Err(Error::invalid("max_iter", "pca requires max_iter > 0"));
    }
    if let Some(tol) = options.tol {
        if tol <= 0.0 || !tol.is_finite() {
            return Err(Error::invalid(
                "tol",
                format!("pca requires finite tol > 0, got {tol}"),
            ));
        }
    }
    match options.n_components {
        None => Ok(d),
        Some(0) if d > 0 => Err(Error::invalid("n_components", "pca requires n_components > 0")),
        Some(k) if k > d => Err(Error::invalid(
            "n_components",
            format!("pca: n_components={k} exceeds number of features {d}"),
        )),
        Some(k) => Ok(k),
    }
}

/// Generic PCA implementation.
pub fn pca_impl<C>(client: &C, data: &Matrix, options: &PcaOptions) -> Result<PcaResult>
where
    C: RuntimeClient,
{
    validate_finite(data, "pca")?;
    let (n, d) = data.dim();
    let k = validate_pca_options(options, d)?;

    if n == 0 || d == 0 || k == 0 {
        return Ok(PcaResult {
            projected: Matrix::zeros((n, 0)),
            explained_variance_ratio: Vec::new(),
            components: Matrix::zeros((0, d)),
            eigenvalues: Vec::new(),
            mean: Array1::zeros(d),
        });
    }

    debug!(n, d, k, "pca start");
    let mean = data
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(d));
    let centered = data - &mean;
    let cov = covariance_matrix(&centered);

    let mut pairs = power_iteration_impl(client, &cov, k, options.max_iter, options.tol)?;
    pairs.sort_by(|a, b| b.eigenvalue.total_cmp(&a.eigenvalue));

    // With every component extracted the eigenvalues themselves are the total;
    // otherwise the covariance trace stands in for the eigenvalues not computed.
    let total = if k == d {
        pairs.iter().map(|p| p.eigenvalue).sum::<f64>()
    } else {
        cov.diag().sum()
    };
    let explained_variance_ratio = pairs
        .iter()
        .map(|p| if total > 0.0 { p.eigenvalue / total } else { 0.0 })
        .collect::<Vec<_>>();

    let mut components = Matrix::zeros((k, d));
    for (mut row, pair) in components.axis_iter_mut(Axis(0)).zip(&pairs) {
        row.assign(&pair.eigenvector);
    }
    let projected = centered.dot(&components.t());

    info!(
        n,
        d,
        k,
        explained = explained_variance_ratio.iter().sum::<f64>(),
        "pca complete"
    );

    Ok(PcaResult {
        projected,
        explained_variance_ratio,
        components,
        eigenvalues: pairs.into_iter().map(|p| p.eigenvalue).collect(),
        mean,
    })
}
