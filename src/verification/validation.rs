//! Validation helpers for derivative verification.
//!
//! - **Tolerance checks**: [`verify_tol`] ensures a tolerance is finite and
//!   strictly positive.
//! - **Parameter checks**: [`validate_theta`] rejects non-finite entries.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Hessian validation**: [`validate_hessian`] enforces a square
//!   `dim × dim` shape and finite entries.
//!
//! Each helper reports the first offending element only.
use crate::verification::errors::{VerifyError, VerifyResult};
use crate::verification::types::{Grad, Hessian, Theta};

/// Validate a tolerance named `name`.
///
/// # Errors
/// Returns [`VerifyError::InvalidTolerance`] if the value is non-finite or
/// ≤ 0.0.
pub fn verify_tol(name: &'static str, tol: f64) -> VerifyResult<()> {
    if !tol.is_finite() {
        return Err(VerifyError::InvalidTolerance { name, tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(VerifyError::InvalidTolerance {
            name,
            tol,
            reason: "Tolerance must be positive.",
        });
    }
    Ok(())
}

/// Validate that every parameter entry is finite.
///
/// # Errors
/// Returns [`VerifyError::InvalidTheta`] for the first non-finite entry.
pub fn validate_theta(theta: &Theta) -> VerifyResult<()> {
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(VerifyError::InvalidTheta { index, value });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`VerifyError::GradientDimMismatch`] if length does not match `dim`.
/// - [`VerifyError::InvalidGradient`] with the index/value/reason of the
///   first offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> VerifyResult<()> {
    if grad.len() != dim {
        return Err(VerifyError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(VerifyError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate the shape and entries of a Hessian matrix.
///
/// # Errors
/// - [`VerifyError::HessianDimMismatch`] if dimensions do not match `dim`.
/// - [`VerifyError::InvalidHessian`] if any entry is non-finite, with
///   offending row/col indices and value.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> VerifyResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(VerifyError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((i, j), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(VerifyError::InvalidHessian { row: i, col: j, value });
        }
    }
    Ok(())
}
