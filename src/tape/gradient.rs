//! Host-side gradient driver.
//!
//! Purpose
//! -------
//! Provide the evaluation loop an outside optimizer runs for every proposed
//! parameter vector: record one evaluation of an objective on a fresh tape,
//! then return the objective value and its exact gradient.
//!
//! Key behaviors
//! -------------
//! - [`DualObjective`] is an objective written once, generic over
//!   [`Scalar`], so the same code can be evaluated on `f64` (plain value)
//!   and on [`TapeVar`] (recorded for differentiation).
//! - [`value_and_grad`] starts a [`Recording`], registers `θ` as
//!   independents, evaluates the objective, and runs the reverse sweep.
//! - Non-finite objective values are not treated as errors; they are
//!   returned to the caller (with a warning in the log) so the host can
//!   reject the step.
use crate::numeric::scalar::Scalar;
use crate::tape::errors::TapeError;
use crate::tape::recording::Recording;
use crate::tape::var::TapeVar;
use crate::vector::DualVector;
use ndarray::Array1;

/// An objective function generic over the scalar backend.
///
/// `evaluate` receives `θ` as a [`DualVector`] of the active scalar type and
/// returns a single scalar (typically a negative log-likelihood). It must be
/// a pure function of `θ` and `self`.
pub trait DualObjective {
    /// Error type of a failed evaluation; must absorb tape errors so the
    /// driver can report both through one channel.
    type Error: From<TapeError>;

    fn evaluate<T: Scalar>(&self, theta: &DualVector<T>) -> Result<T, Self::Error>;
}

/// Evaluate `objective` at `theta` on the `f64` backend.
///
/// # Errors
/// Propagates any error returned by the objective.
pub fn value<O: DualObjective>(objective: &O, theta: &Array1<f64>) -> Result<f64, O::Error> {
    objective.evaluate(&DualVector::from_array1(theta))
}

/// Value and exact reverse-mode gradient of `objective` at `theta`.
///
/// # Errors
/// - [`TapeError::AlreadyRecording`] (converted into `O::Error`) if this
///   thread is already recording.
/// - Any error returned by the objective.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use stock_assess::numeric::Scalar;
/// # use stock_assess::tape::{value_and_grad, DualObjective, TapeError};
/// # use stock_assess::vector::DualVector;
/// struct Quadratic;
///
/// impl DualObjective for Quadratic {
///     type Error = TapeError;
///
///     fn evaluate<T: Scalar>(&self, theta: &DualVector<T>) -> Result<T, TapeError> {
///         Ok(theta[0] * theta[0] + T::from_f64(3.0) * theta[1])
///     }
/// }
///
/// let (v, g) = value_and_grad(&Quadratic, &array![2.0, 1.0]).unwrap();
/// assert_eq!(v, 7.0);
/// assert_eq!(g.to_vec(), vec![4.0, 3.0]);
/// ```
pub fn value_and_grad<O: DualObjective>(
    objective: &O, theta: &Array1<f64>,
) -> Result<(f64, Array1<f64>), O::Error> {
    let recording = Recording::begin()?;
    let vars = recording.independent(theta)?;
    let output: TapeVar = objective.evaluate(&vars)?;
    let grad = recording.gradient(output)?;

    log::debug!(
        "tape {}: {} nodes, {} independents, value {}",
        recording.epoch(),
        recording.node_count(),
        recording.independent_count(),
        output.value()
    );
    if !output.value().is_finite() {
        log::warn!("objective evaluated to non-finite value {} at theta = {}", output.value(), theta);
    }

    Ok((output.value(), grad))
}
