//! verification::finite_diff — finite-difference gradient and Hessian helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient and Hessian approximations around a
//! parameter vector, together with validation and symmetry cleanup, so the
//! verification layer can compare tape derivatives against an independent
//! numerical reference without depending directly on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Compute forward- or central-difference gradients with error capture and
//!   post-hoc validation via [`run_fd_diff`].
//! - Construct central-difference Hessians, falling back to forward
//!   differences when validation fails, via [`compute_hessian`].
//! - Differentiate the tape gradient of a [`DualObjective`] numerically to
//!   obtain its Hessian via [`tape_hessian`].
//! - Enforce symmetry of Hessian matrices in-place using [`symmetrize_hess`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter vectors, gradients, and Hessians are `ndarray` containers over
//!   `f64` (`Theta`, `Grad`, `Hessian`).
//! - Any error raised by the objective during finite differencing is routed
//!   into the shared `closure_err` cell and treated as a hard failure.
//! - Gradients and Hessians returned from this module satisfy
//!   [`validate_grad`] and [`validate_hessian`].
//!
//! Conventions
//! -----------
//! - Finite differences are taken with respect to the unconstrained
//!   parameter vector; any bounded reparameterization happens inside the
//!   objective.
//! - A captured objective error takes precedence over validation errors,
//!   since the NaN it leaves behind would otherwise mask the cause.
//!
//! Testing notes
//! -------------
//! - Unit tests cover successful and failing paths for gradient and Hessian
//!   validation, the central→forward Hessian fallback, and the Hessian of a
//!   tape gradient on a quadratic objective.
use crate::tape::gradient::{value_and_grad, DualObjective};
use crate::verification::{
    errors::{VerifyError, VerifyResult},
    options::FdScheme,
    types::{Grad, Hessian, Theta},
    validation::{validate_grad, validate_hessian},
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// run_fd_diff — finite-difference gradient with error capture and
/// validation.
///
/// Parameters
/// ----------
/// - `theta`: `&Theta`
///   Point at which the gradient is approximated; its length is the
///   expected gradient dimension.
/// - `func`: `&G`
///   Scalar objective. Expected to write any evaluation error into
///   `closure_err` and return `NaN` in that case.
/// - `closure_err`: `&RefCell<Option<E>>`
///   Side channel for errors raised inside `func`. Cleared on entry and
///   inspected after the finite-difference call.
/// - `scheme`: [`FdScheme`]
///   Forward or central differences.
///
/// Errors
/// ------
/// - Any `E` captured in `closure_err`, converted into [`VerifyError`].
/// - `VerifyError::GradientDimMismatch` / `VerifyError::InvalidGradient`
///   from [`validate_grad`].
///
/// Examples
/// --------
/// ```rust
/// # use std::cell::RefCell;
/// # use ndarray::Array1;
/// # use stock_assess::tape::TapeError;
/// # use stock_assess::verification::{run_fd_diff, FdScheme, Theta};
/// let theta: Theta = Array1::from(vec![0.0_f64, 1.0]);
/// let closure_err: RefCell<Option<TapeError>> = RefCell::new(None);
/// let f = |x: &Theta| x.dot(x);
///
/// let grad = run_fd_diff(&theta, &f, &closure_err, FdScheme::Central).unwrap();
/// assert_eq!(grad.len(), theta.len());
/// ```
pub fn run_fd_diff<G: Fn(&Theta) -> f64, E>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<E>>, scheme: FdScheme,
) -> VerifyResult<Grad>
where
    VerifyError: From<E>,
{
    closure_err.replace(None);
    let fd_grad = match scheme {
        FdScheme::Forward => theta.forward_diff(func),
        FdScheme::Central => theta.central_diff(func),
    };
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}

/// compute_hessian — finite-difference Hessian with validation and symmetry.
///
/// Differentiates the gradient function `f` at `theta`, preferring central
/// differences and falling back to forward differences when the central
/// approximation fails validation. The accepted matrix is symmetrized
/// in-place before being returned.
///
/// # Errors
/// - `VerifyError::HessianDimMismatch` / `VerifyError::InvalidHessian` when
///   the forward-difference fallback also fails validation. The central
///   validation error is discarded.
///
/// # Examples
/// ```rust
/// # use ndarray::Array1;
/// # use stock_assess::verification::{compute_hessian, Theta};
/// let grad_fn = |theta: &Theta| theta.mapv(|x| 2.0 * x);
/// let theta: Theta = Array1::from(vec![1.0_f64, 2.0]);
/// let hess = compute_hessian(&grad_fn, &theta).unwrap();
/// assert_eq!(hess.shape(), &[2, 2]);
/// ```
pub fn compute_hessian<F: Fn(&Theta) -> Grad>(f: &F, theta: &Theta) -> VerifyResult<Hessian> {
    let dim = theta.len();
    let mut cent_hess = theta.central_hessian(f);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(f);
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

/// tape_hessian — Hessian of a [`DualObjective`] from its tape gradient.
///
/// Each gradient evaluation records a fresh tape through
/// [`value_and_grad`]; the Hessian is the finite-difference Jacobian of that
/// exact gradient, so only one order of numerical differentiation is
/// involved.
///
/// # Errors
/// - Any objective or tape error raised during a gradient evaluation.
/// - Validation errors from [`compute_hessian`].
pub fn tape_hessian<O: DualObjective>(objective: &O, theta: &Theta) -> VerifyResult<Hessian>
where
    VerifyError: From<O::Error>,
{
    let closure_err: RefCell<Option<O::Error>> = RefCell::new(None);
    let grad_fn = |t: &Theta| match value_and_grad(objective, t) {
        Ok((_, g)) => g,
        Err(err) => {
            closure_err.replace(Some(err));
            Grad::from_elem(t.len(), f64::NAN)
        }
    };
    let hess = compute_hessian(&grad_fn, theta);
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    hess
}

/// symmetrize_hess — replace each off-diagonal pair `(i, j)` / `(j, i)` with
/// its average, leaving the diagonal unchanged.
///
/// Assumes `hess` is square; called only after [`validate_hessian`].
pub fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::scalar::Scalar;
    use crate::tape::errors::TapeError;
    use crate::vector::DualVector;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Forward and central gradients with and without closure errors.
    // - Validation failures for non-finite gradients.
    // - Finite-difference Hessian construction, symmetry, and validation.
    // - The Hessian of a tape gradient.
    //
    // They intentionally DO NOT cover:
    // - Gradient-check pass/fail decisions (see `gradient_check`).
    // -------------------------------------------------------------------------

    /// f(x, y) = x² + 3xy + 2y², Hessian [[2, 3], [3, 4]].
    struct Quadratic;

    impl DualObjective for Quadratic {
        type Error = TapeError;

        fn evaluate<T: Scalar>(&self, theta: &DualVector<T>) -> Result<T, TapeError> {
            let (x, y) = (theta[0], theta[1]);
            Ok(x * x + T::from_f64(3.0) * x * y + T::from_f64(2.0) * y * y)
        }
    }

    struct AlwaysFails;

    impl DualObjective for AlwaysFails {
        type Error = TapeError;

        fn evaluate<T: Scalar>(&self, _theta: &DualVector<T>) -> Result<T, TapeError> {
            Err(TapeError::NotRecording)
        }
    }

    #[test]
    // Purpose
    // -------
    // Both schemes return a valid gradient for a quadratic.
    //
    // Given
    // -----
    // - f(θ) = θᵀθ at θ = [0.5, -1].
    //
    // Expect
    // ------
    // - Gradient ≈ 2θ for forward (loose) and central (tight) schemes.
    fn run_fd_diff_quadratic_both_schemes() {
        let theta: Theta = array![0.5, -1.0];
        let closure_err: RefCell<Option<TapeError>> = RefCell::new(None);
        let f = |x: &Theta| x.dot(x);

        let fwd = run_fd_diff(&theta, &f, &closure_err, FdScheme::Forward).unwrap();
        let cen = run_fd_diff(&theta, &f, &closure_err, FdScheme::Central).unwrap();
        for i in 0..2 {
            assert_abs_diff_eq!(fwd[i], 2.0 * theta[i], epsilon = 1e-6);
            assert_abs_diff_eq!(cen[i], 2.0 * theta[i], epsilon = 1e-8);
        }
    }

    #[test]
    // Purpose
    // -------
    // An error written into `closure_err` wins over the NaN gradient it
    // leaves behind.
    //
    // Given
    // -----
    // - A closure that stores `TapeError::NotRecording` and returns NaN.
    //
    // Expect
    // ------
    // - `Err(VerifyError::Tape(NotRecording))`.
    fn run_fd_diff_closure_error_is_propagated() {
        let theta: Theta = array![1.0];
        let closure_err: RefCell<Option<TapeError>> = RefCell::new(None);
        let f = |_: &Theta| {
            closure_err.replace(Some(TapeError::NotRecording));
            f64::NAN
        };
        let err = run_fd_diff(&theta, &f, &closure_err, FdScheme::Forward).unwrap_err();
        assert_eq!(err, VerifyError::Tape(TapeError::NotRecording));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite finite-difference gradients are rejected.
    //
    // Given
    // -----
    // - An objective that always returns NaN without signaling an error.
    //
    // Expect
    // ------
    // - `Err(VerifyError::InvalidGradient { .. })`.
    fn run_fd_diff_non_finite_gradient_yields_invalidgradient_error() {
        let theta: Theta = array![0.0, 1.0];
        let closure_err: RefCell<Option<TapeError>> = RefCell::new(None);
        let f = |_x: &Theta| f64::NAN;
        match run_fd_diff(&theta, &f, &closure_err, FdScheme::Central) {
            Err(VerifyError::InvalidGradient { .. }) => {}
            other => panic!("Expected InvalidGradient, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `compute_hessian` produces a finite, symmetric Hessian for a linear
    // gradient.
    //
    // Given
    // -----
    // - g(θ) = 2θ in ℝ².
    //
    // Expect
    // ------
    // - Shape (2, 2), symmetric, ≈ 2I.
    fn compute_hessian_quadratic_returns_symmetric_matrix() {
        let theta: Theta = array![1.0, 2.0];
        let grad_fn = |theta: &Theta| theta.mapv(|x| 2.0 * x);
        let hess = compute_hessian(&grad_fn, &theta).unwrap();
        assert_eq!(hess.shape(), &[2, 2]);
        assert_eq!(hess[[0, 1]], hess[[1, 0]]);
        assert_abs_diff_eq!(hess[[0, 0]], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hess[[1, 1]], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hess[[0, 1]], 0.0, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Both Hessian schemes failing surfaces a validation error.
    //
    // Given
    // -----
    // - A gradient function returning NaN.
    //
    // Expect
    // ------
    // - `Err(VerifyError::InvalidHessian { .. })`.
    fn compute_hessian_non_finite_entries_yield_invalidhessian_error() {
        let theta: Theta = array![0.0];
        let grad_fn = |_theta: &Theta| Array1::from(vec![f64::NAN]);
        match compute_hessian(&grad_fn, &theta) {
            Err(VerifyError::InvalidHessian { .. }) => {}
            other => panic!("Expected InvalidHessian, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The Hessian of the tape gradient matches the analytic Hessian.
    //
    // Given
    // -----
    // - f(x, y) = x² + 3xy + 2y² at (0.3, -0.7).
    //
    // Expect
    // ------
    // - H ≈ [[2, 3], [3, 4]].
    fn tape_hessian_of_quadratic() {
        let h = tape_hessian(&Quadratic, &array![0.3, -0.7]).unwrap();
        let expected = array![[2.0, 3.0], [3.0, 4.0]];
        for ((i, j), &v) in expected.indexed_iter() {
            assert_abs_diff_eq!(h[[i, j]], v, epsilon = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // Objective errors inside the Hessian loop are reported as-is.
    //
    // Given
    // -----
    // - An objective that always fails with `NotRecording`.
    //
    // Expect
    // ------
    // - `Err(VerifyError::Tape(NotRecording))`, not `InvalidHessian`.
    fn tape_hessian_propagates_objective_error() {
        let err = tape_hessian(&AlwaysFails, &array![1.0, 2.0]).unwrap_err();
        assert_eq!(err, VerifyError::Tape(TapeError::NotRecording));
    }

    #[test]
    // Purpose
    // -------
    // `symmetrize_hess` averages each off-diagonal pair and keeps the
    // diagonal.
    //
    // Given
    // -----
    // - [[1, 2], [0, 3]].
    //
    // Expect
    // ------
    // - [[1, 1], [1, 3]].
    fn symmetrize_hess_makes_matrix_symmetric() {
        let mut h: Hessian = Array2::from_shape_vec((2, 2), vec![1.0_f64, 2.0, 0.0, 3.0]).unwrap();
        symmetrize_hess(&mut h);
        assert_eq!(h, array![[1.0, 1.0], [1.0, 3.0]]);
    }
}
