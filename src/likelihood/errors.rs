//! Errors for composition likelihood construction and evaluation.
//!
//! Only structural problems are detected here (mismatched category counts,
//! and errors forwarded from the vector and tape layers). Numeric problems
//! such as `p_i = 0` or negative counts are not errors; they show up as
//! non-finite objective values.
use crate::tape::errors::TapeError;
use crate::vector::errors::VectorError;

/// Result alias for likelihood operations.
pub type LikResult<T> = Result<T, LikError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikError {
    /// Observed and predicted sequences have different lengths.
    ShapeMismatch { observed: usize, expected: usize },

    /// Forwarded from [`DualVector`](crate::vector::DualVector) access.
    Vector(VectorError),

    /// Forwarded from the AD tape runtime.
    Tape(TapeError),
}

impl std::error::Error for LikError {}

impl std::fmt::Display for LikError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikError::ShapeMismatch { observed, expected } => {
                write!(
                    f,
                    "Shape mismatch: {observed} observed categories, {expected} predicted categories"
                )
            }
            LikError::Vector(err) => write!(f, "Vector error: {err}"),
            LikError::Tape(err) => write!(f, "Tape error: {err}"),
        }
    }
}

impl From<VectorError> for LikError {
    fn from(err: VectorError) -> Self {
        LikError::Vector(err)
    }
}

impl From<TapeError> for LikError {
    fn from(err: TapeError) -> Self {
        LikError::Tape(err)
    }
}
