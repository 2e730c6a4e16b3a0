//! The [`Scalar`] trait: one numeric interface, two backends.
//!
//! Every primitive, transform, and likelihood in this crate is written once
//! against [`Scalar`] and instantiated twice:
//!
//! - `f64` for plain evaluation, delegating to the platform math library;
//! - [`TapeVar`](crate::tape::TapeVar) for reverse-mode AD, delegating to the
//!   tape-aware overloads that record each operation and its local partials.
//!
//! The backend is chosen at compile time through the type parameter. Generic
//! code must never branch on which instantiation is active; the trait
//! implementations are the only specialization point.
use statrs::function::gamma;
use std::f64::consts::PI;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A scalar type usable by the dual-mode numeric core.
///
/// Required operations mirror what the host AD runtime must supply for its
/// tape scalar: arithmetic, negation, compound assignment, and the
/// `exp/ln/cos/sqrt/pow/lgamma` overloads. `Default` is the additive
/// identity and is what `DualVector::resize` fills new slots with.
///
/// Method names `pow` and `lgamma` deliberately avoid the inherent `f64`
/// methods (`powf`, the unstable `ln_gamma`) so generic and concrete call
/// sites resolve to the same implementation.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Lift an `f64` constant (zero derivative on the tape backend).
    fn from_f64(v: f64) -> Self;

    /// Primal value as `f64`.
    fn value(&self) -> f64;

    /// `e^self`.
    fn exp(self) -> Self;

    /// Natural logarithm. NaN for negative input, `-inf` at zero.
    fn ln(self) -> Self;

    /// Cosine (radians).
    fn cos(self) -> Self;

    /// Square root. NaN for negative input.
    fn sqrt(self) -> Self;

    /// `self^y` with a scalar exponent.
    fn pow(self, y: Self) -> Self;

    /// Natural log of the absolute gamma function.
    fn lgamma(self) -> Self;

    #[inline]
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    #[inline]
    fn one() -> Self {
        Self::from_f64(1.0)
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn pow(self, y: Self) -> Self {
        f64::powf(self, y)
    }

    #[inline]
    fn lgamma(self) -> Self {
        ln_abs_gamma(self)
    }
}

/// `ln |Γ(x)|` on the whole real line; `+inf` at the poles `0, -1, -2, …`.
///
/// Below `0.5` the reflection `Γ(x) Γ(1 - x) = π / sin(πx)` is taken on
/// `|sin(πx)|`, so intervals where `Γ(x) < 0` give the log of the magnitude
/// rather than NaN.
pub(crate) fn ln_abs_gamma(x: f64) -> f64 {
    if x.is_nan() || x >= 0.5 {
        return gamma::ln_gamma(x);
    }
    if x == x.floor() {
        return f64::INFINITY;
    }
    PI.ln() - (PI * x).sin().abs().ln() - gamma::ln_gamma(1.0 - x)
}
