//! Errors raised while verifying tape derivatives.
//!
//! Validation problems (shapes, non-finite entries, bad tolerances) are
//! reported with the offending index and value. Failures of the objective
//! itself arrive through the `From` conversions, so any objective whose
//! error type converts into [`VerifyError`] can be checked.
use crate::likelihood::errors::LikError;
use crate::tape::errors::TapeError;

/// Result alias for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyError {
    // ---- Inputs ----
    /// Parameter vector entries need to be finite.
    InvalidTheta { index: usize, value: f64 },

    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch { expected: usize, found: usize },

    /// Gradient elements need to be finite.
    InvalidGradient { index: usize, value: f64, reason: &'static str },

    // ---- Hessian ----
    /// Hessian matrix dimensions do not match parameter dimensions.
    HessianDimMismatch { expected: usize, found: (usize, usize) },

    /// Hessian values need to be finite.
    InvalidHessian { row: usize, col: usize, value: f64 },

    // ---- CheckOptions ----
    /// A tolerance needs to be positive and finite.
    InvalidTolerance { name: &'static str, tol: f64, reason: &'static str },

    /// Invalid finite-difference scheme name.
    InvalidScheme { name: String, reason: &'static str },

    // ---- Objective ----
    /// Objective value at θ is NaN or infinite.
    NonFiniteValue { value: f64 },

    /// Forwarded from the AD tape runtime.
    Tape(TapeError),

    /// Forwarded from a likelihood evaluation.
    Likelihood(LikError),
}

impl std::error::Error for VerifyError {}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Inputs ----
            VerifyError::InvalidTheta { index, value } => {
                write!(f, "Invalid theta at index {index}: {value}, must be finite")
            }

            // ---- Gradient ----
            VerifyError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            VerifyError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- Hessian ----
            VerifyError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian dimension mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }
            VerifyError::InvalidHessian { row, col, value } => {
                write!(f, "Invalid Hessian at ({row}, {col}): {value}, must be finite")
            }

            // ---- CheckOptions ----
            VerifyError::InvalidTolerance { name, tol, reason } => {
                write!(f, "Invalid {name} tolerance {tol}: {reason}")
            }
            VerifyError::InvalidScheme { name, reason } => {
                write!(f, "Invalid finite-difference scheme '{name}': {reason}")
            }

            // ---- Objective ----
            VerifyError::NonFiniteValue { value } => {
                write!(f, "Non-finite objective value: {value}")
            }
            VerifyError::Tape(err) => write!(f, "Tape error: {err}"),
            VerifyError::Likelihood(err) => write!(f, "Likelihood error: {err}"),
        }
    }
}

impl From<TapeError> for VerifyError {
    fn from(err: TapeError) -> Self {
        VerifyError::Tape(err)
    }
}

impl From<LikError> for VerifyError {
    fn from(err: LikError) -> Self {
        match err {
            LikError::Tape(inner) => VerifyError::Tape(inner),
            other => VerifyError::Likelihood(other),
        }
    }
}
