use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use descent_core::Hessian;

/// Relative tolerance for treating `H[i][j]` and `H[j][i]` as equal.
const SYMMETRY_TOL: f64 = 1.490_116_119_384_765_6e-8; // √ε

/// Ways a Hessian can fail to define a Newton step.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum HessianError {
    #[error("Hessian entry ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("Hessian is not symmetric: H[{row}][{col}] = {upper}, H[{col}][{row}] = {lower}")]
    NotSymmetric {
        row: usize,
        col: usize,
        upper: f64,
        lower: f64,
    },

    #[error("Hessian is not positive definite")]
    NotPositiveDefinite,
}

/// Solves `H·Δx = -g` for the Newton step.
///
/// The system is solved through a Cholesky factorization of `H`, which
/// exists exactly when `H` is symmetric positive definite. No inverse is
/// formed.
pub(super) fn newton_step<const N: usize>(
    hessian: &Hessian<N>,
    gradient: &[f64; N],
) -> Result<[f64; N], HessianError> {
    check_symmetric(hessian)?;

    let h = DMatrix::from_fn(N, N, |i, j| hessian[i][j]);
    let cholesky = h.cholesky().ok_or(HessianError::NotPositiveDefinite)?;

    let rhs = DVector::from_iterator(N, gradient.iter().map(|g| -g));
    let step = cholesky.solve(&rhs);

    if step.iter().any(|s| !s.is_finite()) {
        return Err(HessianError::NotPositiveDefinite);
    }

    Ok(std::array::from_fn(|i| step[i]))
}

fn check_symmetric<const N: usize>(hessian: &Hessian<N>) -> Result<(), HessianError> {
    for (row, entries) in hessian.iter().enumerate() {
        for (col, &upper) in entries.iter().enumerate().skip(row) {
            let lower = hessian[col][row];
            if !upper.is_finite() {
                return Err(HessianError::NonFinite { row, col });
            }
            if !lower.is_finite() {
                return Err(HessianError::NonFinite { row: col, col: row });
            }

            let scale = upper.abs().max(lower.abs());
            if (upper - lower).abs() > SYMMETRY_TOL * scale {
                return Err(HessianError::NotSymmetric {
                    row,
                    col,
                    upper,
                    lower,
                });
            }
        }
    }
    Ok(())
}
