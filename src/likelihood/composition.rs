//! `CompositionObservation` — observed counts paired with predicted
//! proportions.
//!
//! Purpose
//! -------
//! Carry one composition data point (age or length composition of a fleet
//! or survey): a count per category and the model's predicted probability
//! for the same category. Construction checks that both sequences have the
//! same number of categories, so every downstream reduction can index them
//! in lockstep.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == p.len()` after construction.
//! - Category order is significant: `x[i]` and `p[i]` refer to the same
//!   category.
//! - `p` is expected to sum to one and `x` to be non-negative; neither is
//!   checked.
use crate::likelihood::errors::{LikError, LikResult};
use crate::numeric::scalar::Scalar;
use crate::vector::DualVector;

/// Observed counts `x` and predicted probabilities `p`, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionObservation<T> {
    x: DualVector<T>,
    p: DualVector<T>,
}

impl<T> CompositionObservation<T> {
    /// Pair `x` with `p`.
    ///
    /// # Errors
    /// [`LikError::ShapeMismatch`] if the lengths differ.
    pub fn new(x: DualVector<T>, p: DualVector<T>) -> LikResult<Self> {
        check_shapes(x.len(), p.len())?;
        Ok(CompositionObservation { x, p })
    }

    /// Observed counts.
    pub fn x(&self) -> &DualVector<T> {
        &self.x
    }

    /// Predicted probabilities.
    pub fn p(&self) -> &DualVector<T> {
        &self.p
    }

    /// Number of categories.
    pub fn n_categories(&self) -> usize {
        self.x.len()
    }

    pub fn into_parts(self) -> (DualVector<T>, DualVector<T>) {
        (self.x, self.p)
    }
}

impl<T: Scalar> CompositionObservation<T> {
    /// Sample size `N = Σ xᵢ`.
    pub fn total_count(&self) -> T {
        self.x.sum()
    }
}

/// Fail with [`LikError::ShapeMismatch`] unless the two lengths agree.
pub(crate) fn check_shapes(observed: usize, expected: usize) -> LikResult<()> {
    if observed != expected {
        return Err(LikError::ShapeMismatch { observed, expected });
    }
    Ok(())
}
