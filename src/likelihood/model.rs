//! Model-evaluation entry point for composition likelihoods.
//!
//! Purpose
//! -------
//! Give the host harness an explicitly owned model object to fill and
//! evaluate. The harness constructs a [`CompositionModel`], writes the
//! observed counts `x` and predicted probabilities `p` index-aligned by
//! category, and calls [`NegLogLikelihood::evaluate`] to obtain the scalar
//! objective for the current evaluation.
//!
//! Key behaviors
//! -------------
//! - `evaluate` is idempotent: it reads `x` and `p`, mutates nothing, and
//!   returns the same value for the same contents.
//! - The shape check runs on every call, since `x` and `p` are public and
//!   may have been resized since construction.
//! - One instance per model, owned by whoever drives the evaluation. There
//!   is no process-wide instance.
use crate::likelihood::composition::CompositionObservation;
use crate::likelihood::errors::LikResult;
use crate::likelihood::multinomial::multinomial_nll;
use crate::likelihood::options::MultinomialOptions;
use crate::numeric::scalar::Scalar;
use crate::vector::DualVector;

/// A component that reduces its stored data and predictions to one
/// negative log-likelihood value.
pub trait NegLogLikelihood<T: Scalar> {
    fn evaluate(&self) -> LikResult<T>;
}

/// CompositionModel — multinomial NLL of one composition observation.
///
/// Fields
/// ------
/// - `x`: `DualVector<T>`
///   Observed counts, one per category.
/// - `p`: `DualVector<T>`
///   Predicted probabilities, same length and category order as `x`.
/// - `options`: [`MultinomialOptions`]
///   Whether the multinomial coefficient is included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionModel<T> {
    pub x: DualVector<T>,
    pub p: DualVector<T>,
    pub options: MultinomialOptions,
}

impl<T> CompositionModel<T> {
    /// Empty model; the harness fills `x` and `p` before evaluating.
    pub fn new() -> Self {
        CompositionModel {
            x: DualVector::new(),
            p: DualVector::new(),
            options: MultinomialOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MultinomialOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T> From<CompositionObservation<T>> for CompositionModel<T> {
    fn from(obs: CompositionObservation<T>) -> Self {
        let (x, p) = obs.into_parts();
        CompositionModel { x, p, options: MultinomialOptions::default() }
    }
}

impl<T: Scalar> NegLogLikelihood<T> for CompositionModel<T> {
    fn evaluate(&self) -> LikResult<T> {
        multinomial_nll(&self.x, &self.p, &self.options)
    }
}
