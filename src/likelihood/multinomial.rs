//! Multinomial negative log-likelihood for composition data.
//!
//! Purpose
//! -------
//! Reduce observed category counts `x` and predicted probabilities `p` to
//! one scalar objective contribution,
//!
//! ```text
//! nll = −Σᵢ xᵢ · ln(pᵢ)
//! ```
//!
//! optionally minus the log multinomial coefficient
//! `lgamma(N + 1) − Σ lgamma(xᵢ + 1)` (see [`MultinomialOptions`]).
//!
//! Key behaviors
//! -------------
//! - Generic over [`Scalar`]: the same code gives the value on `f64` and the
//!   recorded gradient on [`TapeVar`](crate::tape::TapeVar).
//! - Shapes are checked before any arithmetic; once the lengths agree the
//!   reduction is a straight-line loop with no branches on values.
//! - `pᵢ = 0` with `xᵢ > 0` gives `+inf`; `pᵢ < 0` gives NaN. Neither is
//!   trapped.
use crate::likelihood::composition::check_shapes;
use crate::likelihood::errors::LikResult;
use crate::likelihood::options::MultinomialOptions;
use crate::numeric::primitives::{lgamma, log};
use crate::numeric::scalar::Scalar;
use crate::vector::DualVector;

/// Multinomial NLL of counts `x` under probabilities `p`.
///
/// # Errors
/// [`LikError::ShapeMismatch`](crate::likelihood::LikError::ShapeMismatch)
/// when `x.len() != p.len()`.
///
/// # Examples
/// ```rust
/// # use stock_assess::likelihood::{multinomial_nll, MultinomialOptions};
/// # use stock_assess::vector::DualVector;
/// let x = DualVector::from_vec(vec![1.0, 1.0]);
/// let p = DualVector::from_vec(vec![0.5, 0.5]);
/// let nll = multinomial_nll(&x, &p, &MultinomialOptions::default()).unwrap();
/// assert!((nll - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn multinomial_nll<T: Scalar>(
    x: &DualVector<T>, p: &DualVector<T>, options: &MultinomialOptions,
) -> LikResult<T> {
    check_shapes(x.len(), p.len())?;

    let mut nll = T::zero();
    for i in 0..x.len() {
        nll -= x[i] * log(p[i]);
    }

    if options.normalizing_constant {
        nll -= log_multinomial_coefficient(x);
    }
    Ok(nll)
}

/// `ln(N! / Πᵢ xᵢ!)` computed through log-gamma, `N = Σ xᵢ`.
pub fn log_multinomial_coefficient<T: Scalar>(x: &DualVector<T>) -> T {
    let one = T::one();
    let mut total = T::zero();
    let mut denom = T::zero();
    for &xi in x.iter() {
        total += xi;
        denom += lgamma(xi + one);
    }
    lgamma(total + one) - denom
}
