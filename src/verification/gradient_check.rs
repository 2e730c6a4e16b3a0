//! Tape gradient versus finite differences.
//!
//! Purpose
//! -------
//! Confirm that the reverse-mode gradient of a [`DualObjective`] agrees with
//! a finite-difference gradient of the same objective evaluated on `f64`.
//! A mismatch points at a derivative rule that was recorded incorrectly or
//! at model code that branches on values in a way the tape cannot see.
//!
//! Key behaviors
//! -------------
//! - [`check_gradient`] evaluates the tape gradient once, the reference
//!   gradient with the configured [`FdScheme`], and compares coordinates
//!   under [`CheckOptions`].
//! - A coordinate passes if it is within `abs_tol` absolutely or within
//!   `rel_tol` relative to the larger of the two magnitudes.
//! - The report is returned whether or not the check passed; a failed check
//!   is logged at `warn` level, a summary of every check at `debug`.
use crate::tape::gradient::{value, value_and_grad, DualObjective};
use crate::verification::errors::{VerifyError, VerifyResult};
use crate::verification::finite_diff::run_fd_diff;
use crate::verification::options::CheckOptions;
use crate::verification::types::{Grad, Theta};
use crate::verification::validation::{validate_grad, validate_theta};
use std::cell::RefCell;

/// GradientCheck — outcome of comparing tape and finite-difference gradients.
///
/// Fields
/// ------
/// - `value`: objective value at θ.
/// - `tape`: reverse-mode gradient.
/// - `finite_diff`: finite-difference reference gradient.
/// - `max_abs_err`: `maxᵢ |tapeᵢ − fdᵢ|`.
/// - `max_rel_err`: `maxᵢ |tapeᵢ − fdᵢ| / max(|tapeᵢ|, |fdᵢ|)` over
///   coordinates where that denominator is non-zero.
/// - `passed`: every coordinate met the absolute or the relative tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheck {
    pub value: f64,
    pub tape: Grad,
    pub finite_diff: Grad,
    pub max_abs_err: f64,
    pub max_rel_err: f64,
    pub passed: bool,
}

/// Compare the tape gradient of `objective` at `theta` with finite
/// differences.
///
/// # Errors
/// - [`VerifyError::InvalidTheta`] if `theta` has a non-finite entry.
/// - [`VerifyError::NonFiniteValue`] if the objective value at `theta` is
///   not finite.
/// - Any objective or tape error, converted into [`VerifyError`].
/// - Gradient validation errors for either gradient.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use stock_assess::numeric::{exp, Scalar};
/// # use stock_assess::tape::{DualObjective, TapeError};
/// # use stock_assess::vector::DualVector;
/// # use stock_assess::verification::{check_gradient, CheckOptions};
/// struct ExpSum;
///
/// impl DualObjective for ExpSum {
///     type Error = TapeError;
///
///     fn evaluate<T: Scalar>(&self, theta: &DualVector<T>) -> Result<T, TapeError> {
///         Ok(exp(theta[0]) + theta[0] * theta[1])
///     }
/// }
///
/// let report = check_gradient(&ExpSum, &array![0.2, 1.5], &CheckOptions::default()).unwrap();
/// assert!(report.passed);
/// ```
pub fn check_gradient<O: DualObjective>(
    objective: &O, theta: &Theta, options: &CheckOptions,
) -> VerifyResult<GradientCheck>
where
    VerifyError: From<O::Error>,
{
    validate_theta(theta)?;
    let dim = theta.len();

    let (value_at_theta, tape) = value_and_grad(objective, theta)?;
    if !value_at_theta.is_finite() {
        return Err(VerifyError::NonFiniteValue { value: value_at_theta });
    }
    validate_grad(&tape, dim)?;

    let closure_err: RefCell<Option<O::Error>> = RefCell::new(None);
    let f = |t: &Theta| match value(objective, t) {
        Ok(v) => v,
        Err(err) => {
            closure_err.replace(Some(err));
            f64::NAN
        }
    };
    let finite_diff = run_fd_diff(theta, &f, &closure_err, options.scheme)?;

    let mut max_abs_err = 0.0_f64;
    let mut max_rel_err = 0.0_f64;
    let mut passed = true;
    for (&t, &d) in tape.iter().zip(finite_diff.iter()) {
        let abs_err = (t - d).abs();
        let scale = t.abs().max(d.abs());
        let rel_err = if scale > 0.0 { abs_err / scale } else { 0.0 };
        max_abs_err = max_abs_err.max(abs_err);
        max_rel_err = max_rel_err.max(rel_err);
        if abs_err > options.abs_tol && rel_err > options.rel_tol {
            passed = false;
        }
    }

    log::debug!(
        "gradient check ({:?}): dim {}, max abs err {:.3e}, max rel err {:.3e}",
        options.scheme,
        dim,
        max_abs_err,
        max_rel_err
    );
    if !passed {
        log::warn!(
            "gradient check failed at theta = {}: tape {} vs finite differences {}",
            theta,
            tape,
            finite_diff
        );
    }

    Ok(GradientCheck { value: value_at_theta, tape, finite_diff, max_abs_err, max_rel_err, passed })
}
