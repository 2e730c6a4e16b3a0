//! Errors for [`DualVector`](super::DualVector) access and mutation.
//!
//! Only conditions that are actually detected are represented here. Numeric
//! domain problems inside the stored values are never errors at this layer.

/// Result alias for checked vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Checked access or positional mutation outside the valid range.
    OutOfRange { index: usize, len: usize },

    /// A `[start, end)` range with `start > end` or `end > len`.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl std::error::Error for VectorError {}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range for vector of length {len}")
            }
            VectorError::InvalidRange { start, end, len } => {
                write!(f, "Invalid range {start}..{end} for vector of length {len}")
            }
        }
    }
}
