//! verification — checking tape derivatives against finite differences.
//!
//! Purpose
//! -------
//! Give model authors a way to confirm that an objective written against
//! [`Scalar`](crate::numeric::Scalar) differentiates correctly on the tape,
//! and a numerical Hessian of the exact gradient for curvature diagnostics.
//!
//! Key behaviors
//! -------------
//! - `gradient_check`: [`check_gradient`] compares the tape gradient with a
//!   forward- or central-difference reference and reports the error
//!   measures in a [`GradientCheck`].
//! - `finite_diff`: [`run_fd_diff`], [`compute_hessian`], [`tape_hessian`],
//!   [`symmetrize_hess`] wrap the `finitediff` crate with error capture and
//!   validation.
//! - `validation`: shared shape/finiteness/tolerance checks.
//! - `options`: [`CheckOptions`] and the string-parsable [`FdScheme`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are checked on the `f64` instantiation for the reference and
//!   on the tape instantiation for the gradient under test; both come from
//!   the same generic code.
//! - Objective errors convert into [`VerifyError`] through `From`, so
//!   `TapeError`, `LikError`, or a caller's own error type (with a `From`
//!   impl) all work.
//!
//! Conventions
//! -----------
//! - This is a host-facing layer and logs through the `log` facade (`debug`
//!   summaries, `warn` on failed checks). No logger is installed here.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; the integration test in
//!   `tests/` runs `check_gradient` on a full composition objective.

pub mod errors;
pub mod finite_diff;
pub mod gradient_check;
pub mod options;
pub mod types;
pub mod validation;

pub use self::errors::{VerifyError, VerifyResult};
pub use self::finite_diff::{compute_hessian, run_fd_diff, symmetrize_hess, tape_hessian};
pub use self::gradient_check::{check_gradient, GradientCheck};
pub use self::options::{CheckOptions, FdScheme};
pub use self::types::{Grad, Hessian, Theta};
pub use self::validation::{validate_grad, validate_hessian, validate_theta, verify_tol};

pub mod prelude {
    pub use super::errors::{VerifyError, VerifyResult};
    pub use super::finite_diff::{compute_hessian, run_fd_diff, symmetrize_hess, tape_hessian};
    pub use super::gradient_check::{check_gradient, GradientCheck};
    pub use super::options::{CheckOptions, FdScheme};
    pub use super::types::{Grad, Hessian, Theta};
}
