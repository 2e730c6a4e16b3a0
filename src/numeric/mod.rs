//! numeric — the dual-mode math core.
//!
//! Purpose
//! -------
//! Hold the scalar abstraction and the math every sub-model is built from.
//! Everything here is written once against [`Scalar`] and runs unchanged on
//! `f64` and on the tape scalar [`TapeVar`](crate::tape::TapeVar).
//!
//! Key behaviors
//! -------------
//! - `scalar`: the [`Scalar`] trait and its `f64` implementation.
//! - `primitives`: `exp`, `log`, `cos`, `sqrt`, `pow`, `lgamma`, `sum`.
//! - `transformations`: logistic family, bounded logit transforms, and the
//!   smooth `ad_fabs` / `ad_min` / `ad_max` surrogates.
//!
//! Invariants & assumptions
//! ------------------------
//! - No function in this module validates, clamps, logs, or returns errors.
//!   Domain violations show up as NaN/±inf in the objective.
//! - Every function is a straight-line expression, so the recorded tape has
//!   the same shape for every parameter value.
//!
//! Downstream usage
//! ----------------
//! - Model code usually writes `use stock_assess::numeric::prelude::*;` and
//!   calls the free functions directly on its generic scalar.

pub mod primitives;
pub mod scalar;
pub mod transformations;

pub use self::primitives::{cos, exp, lgamma, log, pow, sqrt, sum, sum_slice};
pub use self::scalar::Scalar;
pub use self::transformations::{
    ad_fabs, ad_fabs_with, ad_max, ad_max_with, ad_min, ad_min_with, double_logistic, inv_logit,
    logistic, logit, AD_FABS_EPS,
};

pub mod prelude {
    pub use super::primitives::{cos, exp, lgamma, log, pow, sqrt, sum, sum_slice};
    pub use super::scalar::Scalar;
    pub use super::transformations::{
        ad_fabs, ad_fabs_with, ad_max, ad_max_with, ad_min, ad_min_with, double_logistic,
        inv_logit, logistic, logit, AD_FABS_EPS,
    };
}
