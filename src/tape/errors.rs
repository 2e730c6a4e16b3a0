//! Errors raised by the AD tape runtime.
//!
//! These cover misuse of the recording lifecycle only. Numeric problems on
//! the tape (NaN partials, infinite values) are not errors; they flow through
//! the reverse sweep like any other value.

/// Result alias for tape operations.
pub type TapeResult<T> = Result<T, TapeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapeError {
    /// A recording is already active on this thread.
    AlreadyRecording,

    /// No recording is active on this thread (or it belongs to another
    /// `Recording` handle).
    NotRecording,

    /// The output variable was recorded on a different tape.
    ForeignVariable { expected_epoch: u32, found_epoch: u32 },
}

impl std::error::Error for TapeError {}

impl std::fmt::Display for TapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapeError::AlreadyRecording => {
                write!(f, "An AD tape is already recording on this thread")
            }
            TapeError::NotRecording => {
                write!(f, "No AD tape is recording on this thread")
            }
            TapeError::ForeignVariable { expected_epoch, found_epoch } => {
                write!(
                    f,
                    "Variable belongs to tape {found_epoch}, but the active tape is {expected_epoch}"
                )
            }
        }
    }
}
