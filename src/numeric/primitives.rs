//! Generic math primitives over [`Scalar`].
//!
//! Thin free-function front-ends for the trait methods so model code reads
//! like the formulas it implements (`exp(-m)` rather than `(-m).exp()`).
//! Each function dispatches statically to the backend of `T`: the platform
//! implementation for `f64`, the recording overload for
//! [`TapeVar`](crate::tape::TapeVar).
//!
//! Inputs are never clamped. `log`, `sqrt`, and `pow` return NaN/±inf off
//! their mathematical domains and callers are responsible for staying
//! in-domain (see [`transformations`](super::transformations) for the bounded
//! reparameterizations used for that).
use crate::numeric::scalar::Scalar;
use crate::vector::DualVector;

/// Exponential function `e^x`.
#[inline]
pub fn exp<T: Scalar>(x: T) -> T {
    x.exp()
}

/// Natural logarithm.
#[inline]
pub fn log<T: Scalar>(x: T) -> T {
    x.ln()
}

/// Cosine.
#[inline]
pub fn cos<T: Scalar>(x: T) -> T {
    x.cos()
}

/// Square root.
#[inline]
pub fn sqrt<T: Scalar>(x: T) -> T {
    x.sqrt()
}

/// Power `x^y`.
#[inline]
pub fn pow<T: Scalar>(x: T, y: T) -> T {
    x.pow(y)
}

/// Log-gamma `ln Γ(x)`.
#[inline]
pub fn lgamma<T: Scalar>(x: T) -> T {
    x.lgamma()
}

/// Sum of a slice, accumulated from zero in index order.
///
/// The fixed order keeps the recorded tape (and therefore the floating-point
/// result) identical across repeated evaluations.
pub fn sum_slice<T: Scalar>(values: &[T]) -> T {
    let mut total = T::zero();
    for &v in values {
        total += v;
    }
    total
}

/// Sum of the elements of a [`DualVector`].
///
/// # Examples
/// ```rust
/// # use stock_assess::numeric::sum;
/// # use stock_assess::vector::DualVector;
/// let v = DualVector::from_vec(vec![1.0, 2.0, 3.5]);
/// assert_eq!(sum(&v), 6.5);
/// ```
#[inline]
pub fn sum<T: Scalar>(values: &DualVector<T>) -> T {
    sum_slice(values.as_slice())
}
