//! Maturity ogives built on the logistic transforms.
//!
//! Purpose
//! -------
//! Express the proportion of fish mature at a given age or size as a
//! functor over a generic scalar, so that ogive parameters can be estimated
//! with tape gradients exactly like any other model parameter.
//!
//! Key behaviors
//! -------------
//! - [`MaturityModel`] is the functor interface: `evaluate(x)` for one age or
//!   size, `evaluate_at(xs)` for a whole vector of them.
//! - [`LogisticMaturity`] is the usual monotone ogive.
//! - [`DoubleLogisticCurve`] is the dome-shaped variant (ascending limb times
//!   one minus a descending limb).
//!
//! Invariants & assumptions
//! ------------------------
//! - Outputs lie in `(0, 1)` for finite inputs and parameters.
//! - Parameters are not validated; a descending inflection point below the
//!   ascending one yields a valid but biologically odd curve.
use crate::numeric::scalar::Scalar;
use crate::numeric::transformations::{double_logistic, logistic};
use crate::vector::DualVector;

/// Functor mapping an age or size to a proportion mature.
pub trait MaturityModel<T: Scalar> {
    /// Proportion mature at `x`.
    fn evaluate(&self, x: T) -> T;

    /// Proportion mature at every element of `xs`, index-aligned.
    fn evaluate_at(&self, xs: &DualVector<T>) -> DualVector<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// LogisticMaturity — `1 / (1 + exp(−slope · (x − inflection_point)))`.
///
/// Fields
/// ------
/// - `inflection_point`: `T`
///   Age or size at 50 % maturity.
/// - `slope`: `T`
///   Steepness at the inflection point; positive for an increasing ogive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticMaturity<T> {
    pub inflection_point: T,
    pub slope: T,
}

impl<T: Scalar> LogisticMaturity<T> {
    pub fn new(inflection_point: T, slope: T) -> Self {
        LogisticMaturity { inflection_point, slope }
    }
}

impl<T: Scalar> MaturityModel<T> for LogisticMaturity<T> {
    fn evaluate(&self, x: T) -> T {
        logistic(self.inflection_point, self.slope, x)
    }
}

/// DoubleLogisticCurve — ascending logistic times one minus a descending
/// logistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleLogisticCurve<T> {
    pub inflection_point_asc: T,
    pub slope_asc: T,
    pub inflection_point_desc: T,
    pub slope_desc: T,
}

impl<T: Scalar> DoubleLogisticCurve<T> {
    pub fn new(
        inflection_point_asc: T, slope_asc: T, inflection_point_desc: T, slope_desc: T,
    ) -> Self {
        DoubleLogisticCurve { inflection_point_asc, slope_asc, inflection_point_desc, slope_desc }
    }
}

impl<T: Scalar> MaturityModel<T> for DoubleLogisticCurve<T> {
    fn evaluate(&self, x: T) -> T {
        double_logistic(
            self.inflection_point_asc,
            self.slope_asc,
            self.inflection_point_desc,
            self.slope_desc,
            x,
        )
    }
}
