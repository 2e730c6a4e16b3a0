//! `Recording` — RAII handle over the thread's active tape.
//!
//! Purpose
//! -------
//! Give the host driver an owned handle for one gradient evaluation: start a
//! tape, register the independent variables, run the model on `TapeVar`
//! scalars, and pull the gradient of the final scalar out of the reverse
//! sweep. Dropping the handle ends the recording.
//!
//! Invariants & assumptions
//! ------------------------
//! - At most one recording is active per thread; `begin` fails with
//!   [`TapeError::AlreadyRecording`](crate::tape::TapeError::AlreadyRecording)
//!   otherwise.
//! - A `Recording` is `!Send`: the tape lives in thread-local storage and
//!   must be used from the thread that started it.
//! - Gradients are reported in independent-registration order.
use crate::tape::errors::TapeResult;
use crate::tape::recorder;
use crate::tape::var::TapeVar;
use crate::vector::DualVector;
use ndarray::Array1;
use std::marker::PhantomData;

/// Handle to the active tape of the current thread.
#[derive(Debug)]
pub struct Recording {
    epoch: u32,
    _not_send: PhantomData<*const ()>,
}

impl Recording {
    /// Activate a fresh tape on this thread.
    ///
    /// # Errors
    /// [`TapeError::AlreadyRecording`](crate::tape::TapeError::AlreadyRecording)
    /// if another recording is active on this thread.
    pub fn begin() -> TapeResult<Self> {
        let epoch = recorder::activate()?;
        Ok(Recording { epoch, _not_send: PhantomData })
    }

    /// Unique identifier of this tape.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Register `values` as independent variables and hand them back as tape
    /// scalars, index-aligned with `values`.
    ///
    /// # Errors
    /// [`TapeError::NotRecording`](crate::tape::TapeError::NotRecording) if
    /// this handle's tape is no longer the active tape of the thread.
    pub fn independent(&self, values: &Array1<f64>) -> TapeResult<DualVector<TapeVar>> {
        let mut out = DualVector::with_capacity(values.len());
        for &v in values.iter() {
            let node = recorder::push_independent(self.epoch)?;
            out.push_back(TapeVar::from_node(v, node));
        }
        Ok(out)
    }

    /// Number of recorded nodes (independents included).
    pub fn node_count(&self) -> usize {
        recorder::node_count(self.epoch).unwrap_or(0)
    }

    /// Number of registered independent variables.
    pub fn independent_count(&self) -> usize {
        recorder::independent_count(self.epoch).unwrap_or(0)
    }

    /// Reverse sweep: gradient of `output` with respect to every registered
    /// independent variable.
    ///
    /// A constant `output` (one that does not depend on any independent)
    /// yields a zero gradient.
    ///
    /// # Errors
    /// - [`TapeError::ForeignVariable`](crate::tape::TapeError::ForeignVariable)
    ///   if `output` was recorded on another
    ///   tape.
    /// - [`TapeError::NotRecording`](crate::tape::TapeError::NotRecording) if
    ///   this handle's tape is no longer
    ///   active.
    pub fn gradient(&self, output: TapeVar) -> TapeResult<Array1<f64>> {
        let grad = recorder::gradient(self.epoch, output.node())?;
        Ok(Array1::from_iter(grad.iter().copied()))
    }
}

impl Drop for Recording {
    fn drop(&mut self) {
        recorder::deactivate(self.epoch);
    }
}
