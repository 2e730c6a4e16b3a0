//! likelihood — composition data and the multinomial objective.
//!
//! Purpose
//! -------
//! Turn observed category counts and model-predicted proportions into the
//! scalar negative log-likelihood the host minimizes.
//!
//! Key behaviors
//! -------------
//! - [`CompositionObservation`] pairs counts with predictions and checks that
//!   they cover the same categories.
//! - [`multinomial_nll`] computes `−Σ xᵢ ln pᵢ`, optionally with the
//!   multinomial coefficient ([`MultinomialOptions`]).
//! - [`CompositionModel`] is the owned model the harness fills and
//!   evaluates through [`NegLogLikelihood`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape mismatches are the only detected failure and are reported as
//!   [`LikError::ShapeMismatch`] before any arithmetic.
//! - `p` summing to one is the caller's responsibility.
//! - Nothing here logs or performs I/O.
//!
//! Downstream usage
//! ----------------
//! - Objectives implementing [`DualObjective`](crate::tape::DualObjective)
//!   map parameters to `p`, build a model, and return its `evaluate()`;
//!   `LikError` absorbs tape errors so it can serve as the objective's error
//!   type directly.

pub mod composition;
pub mod errors;
pub mod model;
pub mod multinomial;
pub mod options;

pub use self::composition::CompositionObservation;
pub use self::errors::{LikError, LikResult};
pub use self::model::{CompositionModel, NegLogLikelihood};
pub use self::multinomial::{log_multinomial_coefficient, multinomial_nll};
pub use self::options::MultinomialOptions;

pub mod prelude {
    pub use super::composition::CompositionObservation;
    pub use super::errors::{LikError, LikResult};
    pub use super::model::{CompositionModel, NegLogLikelihood};
    pub use super::multinomial::{log_multinomial_coefficient, multinomial_nll};
    pub use super::options::MultinomialOptions;
}
