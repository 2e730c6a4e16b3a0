//! `TapeVar` — the AD-tape instantiation of [`Scalar`].
//!
//! A `TapeVar` is a primal `f64` plus an optional reference to the node that
//! produced it on the thread's active tape. Arithmetic and the math overloads
//! compute the primal value eagerly and record the local partial derivatives
//! of the result with respect to each live input, so the reverse sweep never
//! needs to re-evaluate anything.
//!
//! Constants (`TapeVar::constant`, `Scalar::from_f64`, `Default`) carry no
//! node and contribute nothing to gradients. Comparison and equality look at
//! primal values only.
use crate::numeric::scalar::{ln_abs_gamma, Scalar};
use crate::tape::recorder::{self, NodeRef};
use statrs::function::gamma;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar recorded on the thread-local AD tape.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapeVar {
    value: f64,
    node: Option<NodeRef>,
}

impl TapeVar {
    /// A constant: participates in arithmetic but has zero derivative.
    pub const fn constant(value: f64) -> Self {
        TapeVar { value, node: None }
    }

    pub(crate) fn from_node(value: f64, node: NodeRef) -> Self {
        TapeVar { value, node: Some(node) }
    }

    /// Whether this value is connected to a tape.
    pub fn is_recorded(&self) -> bool {
        self.node.is_some()
    }

    pub(crate) fn node(&self) -> Option<NodeRef> {
        self.node
    }

    #[inline]
    fn unary(self, value: f64, partial: f64) -> Self {
        TapeVar { value, node: recorder::record(&[(self.node, partial)]) }
    }

    #[inline]
    fn binary(self, rhs: TapeVar, value: f64, d_lhs: f64, d_rhs: f64) -> Self {
        TapeVar { value, node: recorder::record(&[(self.node, d_lhs), (rhs.node, d_rhs)]) }
    }
}

// ---- Arithmetic ----

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $rule:expr) => {
        impl $op for TapeVar {
            type Output = TapeVar;

            #[inline]
            fn $method(self, rhs: TapeVar) -> TapeVar {
                let (value, d_lhs, d_rhs) = ($rule)(self.value, rhs.value);
                self.binary(rhs, value, d_lhs, d_rhs)
            }
        }

        impl $op<f64> for TapeVar {
            type Output = TapeVar;

            #[inline]
            fn $method(self, rhs: f64) -> TapeVar {
                self.$method(TapeVar::constant(rhs))
            }
        }

        impl $op<TapeVar> for f64 {
            type Output = TapeVar;

            #[inline]
            fn $method(self, rhs: TapeVar) -> TapeVar {
                TapeVar::constant(self).$method(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, |a: f64, b: f64| (a + b, 1.0, 1.0));
impl_binary_op!(Sub, sub, |a: f64, b: f64| (a - b, 1.0, -1.0));
impl_binary_op!(Mul, mul, |a: f64, b: f64| (a * b, b, a));
impl_binary_op!(Div, div, |a: f64, b: f64| (a / b, 1.0 / b, -a / (b * b)));

macro_rules! impl_assign_op {
    ($op:ident, $method:ident, $base:ident) => {
        impl $op for TapeVar {
            #[inline]
            fn $method(&mut self, rhs: TapeVar) {
                *self = self.$base(rhs);
            }
        }

        impl $op<f64> for TapeVar {
            #[inline]
            fn $method(&mut self, rhs: f64) {
                *self = self.$base(TapeVar::constant(rhs));
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add);
impl_assign_op!(SubAssign, sub_assign, sub);
impl_assign_op!(MulAssign, mul_assign, mul);
impl_assign_op!(DivAssign, div_assign, div);

impl Neg for TapeVar {
    type Output = TapeVar;

    #[inline]
    fn neg(self) -> TapeVar {
        self.unary(-self.value, -1.0)
    }
}

// ---- Comparison (primal values) ----

impl PartialEq for TapeVar {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for TapeVar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for TapeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// ---- Tape-aware math ----

impl Scalar for TapeVar {
    #[inline]
    fn from_f64(v: f64) -> Self {
        TapeVar::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.value.exp();
        self.unary(e, e)
    }

    #[inline]
    fn ln(self) -> Self {
        self.unary(self.value.ln(), 1.0 / self.value)
    }

    #[inline]
    fn cos(self) -> Self {
        self.unary(self.value.cos(), -self.value.sin())
    }

    #[inline]
    fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        self.unary(s, 0.5 / s)
    }

    #[inline]
    fn pow(self, y: Self) -> Self {
        let (x, p) = (self.value, y.value);
        let v = x.powf(p);
        // x^y ln x is only needed (and only finite) when the exponent is live.
        let d_y = if y.node.is_some() { v * x.ln() } else { 0.0 };
        self.binary(y, v, p * x.powf(p - 1.0), d_y)
    }

    #[inline]
    fn lgamma(self) -> Self {
        self.unary(ln_abs_gamma(self.value), gamma::digamma(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Recording;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Local derivative rules of every recorded operation, checked through a
    // full record → reverse sweep cycle against closed-form derivatives.
    // -------------------------------------------------------------------------

    fn grad1(x0: f64, f: impl FnOnce(TapeVar) -> TapeVar) -> (f64, f64) {
        let rec = Recording::begin().unwrap();
        let x = rec.independent(&array![x0]).unwrap();
        let y = f(x[0]);
        let g = rec.gradient(y).unwrap();
        (y.value(), g[0])
    }

    fn grad2(x0: f64, y0: f64, f: impl FnOnce(TapeVar, TapeVar) -> TapeVar) -> (f64, f64, f64) {
        let rec = Recording::begin().unwrap();
        let v = rec.independent(&array![x0, y0]).unwrap();
        let out = f(v[0], v[1]);
        let g = rec.gradient(out).unwrap();
        (out.value(), g[0], g[1])
    }

    #[test]
    // Purpose
    // -------
    // Arithmetic partials: +, -, *, /, negation.
    //
    // Given
    // -----
    // - x = 3, y = 2.
    //
    // Expect
    // ------
    // - ∂(x + y) = (1, 1), ∂(x - y) = (1, -1), ∂(x y) = (y, x),
    //   ∂(x / y) = (1/y, -x/y²), ∂(-x) = -1.
    fn arithmetic_partials() {
        assert_eq!(grad2(3.0, 2.0, |x, y| x + y), (5.0, 1.0, 1.0));
        assert_eq!(grad2(3.0, 2.0, |x, y| x - y), (1.0, 1.0, -1.0));
        assert_eq!(grad2(3.0, 2.0, |x, y| x * y), (6.0, 2.0, 3.0));
        assert_eq!(grad2(3.0, 2.0, |x, y| x / y), (1.5, 0.5, -0.75));
        assert_eq!(grad1(3.0, |x| -x), (-3.0, -1.0));
    }

    #[test]
    // Purpose
    // -------
    // Mixed arithmetic with `f64` constants and compound assignment.
    //
    // Given
    // -----
    // - f(x) = 2 - x * 4 + x / 2, then `f += x; f *= 3`.
    //
    // Expect
    // ------
    // - f'(x) = 3 * (-4 + 0.5 + 1) = -7.5.
    fn mixed_and_assign_ops() {
        let (_, d) = grad1(1.3, |x| {
            let mut f = 2.0 - x * 4.0 + x / 2.0;
            f += x;
            f *= TapeVar::constant(3.0);
            f
        });
        assert_relative_eq!(d, -7.5, epsilon = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Math overload partials match closed forms.
    //
    // Given
    // -----
    // - x = 1.7.
    //
    // Expect
    // ------
    // - exp' = exp, ln' = 1/x, cos' = -sin, sqrt' = 1/(2√x),
    //   lgamma' = digamma.
    fn math_partials() {
        let x0 = 1.7_f64;
        assert_relative_eq!(grad1(x0, |x| x.exp()).1, x0.exp(), epsilon = 1e-14);
        assert_relative_eq!(grad1(x0, |x| x.ln()).1, 1.0 / x0, epsilon = 1e-14);
        assert_relative_eq!(grad1(x0, |x| x.cos()).1, -x0.sin(), epsilon = 1e-14);
        assert_relative_eq!(grad1(x0, |x| x.sqrt()).1, 0.5 / x0.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(grad1(x0, |x| x.lgamma()).1, gamma::digamma(x0), epsilon = 1e-12);
        assert_relative_eq!(grad1(x0, |x| x.lgamma()).0, gamma::ln_gamma(x0), epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // On an interval where Γ < 0 the tape value is ln |Γ| and its partial is
    // still digamma, so value and derivative describe the same function.
    //
    // Given
    // -----
    // - x = -0.5, where Γ(-0.5) = -2√π.
    //
    // Expect
    // ------
    // - value = 1.2655121234846454, equal to the `f64` backend.
    // - derivative = digamma(-0.5), matching a central difference of the
    //   `f64` backend.
    fn lgamma_negative_argument_value_and_partial_agree() {
        let x0 = -0.5_f64;
        let (v, d) = grad1(x0, |x| x.lgamma());
        assert_relative_eq!(v, 1.2655121234846454, epsilon = 1e-12);
        assert_eq!(v, Scalar::lgamma(x0));
        assert_relative_eq!(d, gamma::digamma(x0), epsilon = 1e-12);

        let h = 1e-6;
        let fd = (Scalar::lgamma(x0 + h) - Scalar::lgamma(x0 - h)) / (2.0 * h);
        assert_relative_eq!(d, fd, epsilon = 1e-7);
    }

    #[test]
    // Purpose
    // -------
    // `pow` differentiates in both the base and the exponent.
    //
    // Given
    // -----
    // - x = 2, y = 3.
    //
    // Expect
    // ------
    // - value 8, ∂x = y x^(y-1) = 12, ∂y = x^y ln x = 8 ln 2.
    fn pow_partials() {
        let (v, dx, dy) = grad2(2.0, 3.0, |x, y| x.pow(y));
        assert_relative_eq!(v, 8.0, epsilon = 1e-14);
        assert_relative_eq!(dx, 12.0, epsilon = 1e-12);
        assert_relative_eq!(dy, 8.0 * 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A constant exponent on a zero base does not inject NaN through the
    // unused ln(0) term.
    //
    // Given
    // -----
    // - x = 0 recorded, exponent constant 2.
    //
    // Expect
    // ------
    // - d/dx x² at 0 is exactly 0.
    fn pow_constant_exponent_at_zero_base() {
        let (v, d) = grad1(0.0, |x| x.pow(TapeVar::constant(2.0)));
        assert_eq!(v, 0.0);
        assert_eq!(d, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Reused variables accumulate adjoints along every path.
    //
    // Given
    // -----
    // - f(x) = x * x * x at x = 2.
    //
    // Expect
    // ------
    // - f'(2) = 3 x² = 12.
    fn fan_out_accumulates() {
        assert_eq!(grad1(2.0, |x| x * x * x), (8.0, 12.0));
    }

    #[test]
    // Purpose
    // -------
    // Constants never touch the tape and compare by primal value.
    //
    // Given
    // -----
    // - Arithmetic on constants outside any recording.
    //
    // Expect
    // ------
    // - Results are unrecorded and numerically correct.
    fn constants_are_unrecorded() {
        let a = TapeVar::constant(1.5);
        let b = TapeVar::from_f64(2.0);
        let c = (a * b).exp();
        assert!(!c.is_recorded());
        assert_relative_eq!(c.value(), 3.0_f64.exp(), epsilon = 1e-14);
        assert!(a < b);
        assert_eq!(TapeVar::default(), TapeVar::constant(0.0));
        assert_eq!(format!("{}", a), "1.5");
    }
}
