//! stock_assess — dual-mode numeric core for stock-assessment likelihoods.
//!
//! Purpose
//! -------
//! Provide the numerical foundation a fisheries stock-assessment model is
//! built on: math primitives, bounded transforms, smooth surrogates for
//! non-differentiable functions, a sequence container, and a composition
//! likelihood. Every piece is written once, generic over a scalar type, and
//! runs either on plain `f64` (fast evaluation) or on a reverse-mode AD tape
//! scalar (exact gradients for a host optimizer).
//!
//! Key behaviors
//! -------------
//! - `numeric`: the [`Scalar`](numeric::Scalar) trait and the generic
//!   primitives and transforms (`exp`, `log`, `lgamma`, `logistic`,
//!   `inv_logit`, `ad_fabs`, `ad_min`, `ad_max`, …).
//! - `vector`: [`DualVector`](vector::DualVector), the model-facing
//!   container, with named conversions to `ndarray::Array1` and to the
//!   tape's bookkeeping vector.
//! - `tape`: a thread-local reverse-mode tape, its scalar
//!   [`TapeVar`](tape::TapeVar), and the
//!   [`value_and_grad`](tape::value_and_grad) driver.
//! - `likelihood`: composition observations and the multinomial negative
//!   log-likelihood.
//! - `biology`: maturity ogives built on the logistic transforms.
//! - `verification`: tape gradients checked against finite differences.
//!
//! Invariants & assumptions
//! ------------------------
//! - Generic code never branches on which scalar backend is active; the
//!   `Scalar` implementations are the only specialization point.
//! - Domain violations in the math (log of a non-positive number, a
//!   probability of zero) are not errors. They propagate as NaN/±inf to the
//!   final objective, where the host rejects the step.
//! - Structural problems (out-of-range access, mismatched lengths, tape
//!   misuse, invalid options) are reported through per-module error enums.
//!
//! Conventions
//! -----------
//! - Each module exposes `XError` / `XResult<T>` and, where useful, a
//!   `prelude` re-exporting its main surface.
//! - The numerical layers perform no I/O and no logging. Only the
//!   host-facing drivers (`tape::value_and_grad`, `verification`) emit
//!   diagnostics, through the `log` facade; installing a logger is left to
//!   the application.
//!
//! Downstream usage
//! ----------------
//! - Implement [`DualObjective`](tape::DualObjective) for a model, mapping
//!   unconstrained parameters through the transforms into predictions and
//!   reducing them with the likelihood.
//! - Call [`value_and_grad`](tape::value_and_grad) from the optimizer loop,
//!   and [`check_gradient`](verification::check_gradient) while developing
//!   the model.
//!
//! Testing notes
//! -------------
//! - Unit tests sit next to the code in every module.
//! - `tests/integration_composition_pipeline.rs` runs the full
//!   transform → tape → likelihood → gradient check flow.

pub mod biology;
pub mod likelihood;
pub mod numeric;
pub mod tape;
pub mod vector;
pub mod verification;

pub mod prelude {
    pub use crate::biology::{DoubleLogisticCurve, LogisticMaturity, MaturityModel};
    pub use crate::likelihood::prelude::*;
    pub use crate::numeric::prelude::*;
    pub use crate::tape::prelude::*;
    pub use crate::vector::{DualVector, VectorError, VectorResult};
    pub use crate::verification::prelude::*;
}
