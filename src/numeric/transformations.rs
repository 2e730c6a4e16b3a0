//! Differentiable transforms and smooth surrogates.
//!
//! Provides the nonlinear building blocks stock-assessment sub-models use to
//! keep estimated quantities inside biologically valid ranges without
//! introducing kinks that would break reverse-mode differentiation. Every
//! function is generic over [`Scalar`] and is a straight-line expression: no
//! branches, no clamping, no error returns. Off-domain inputs propagate
//! NaN/±inf to the final objective, where the host rejects the step.
//!
//! # Provided items
//! - [`AD_FABS_EPS`]: default smoothing constant `C = 1e-5`.
//! - [`logistic`], [`double_logistic`]: monotone and dome-shaped curves.
//! - [`logit`], [`inv_logit`]: bounded `(a, b)` ⇄ unbounded ℝ
//!   reparameterization.
//! - [`ad_fabs`], [`ad_min`], [`ad_max`] (and their `_with` forms taking an
//!   explicit `C`): smooth surrogates for `|x|`, `min`, `max`.
//!
//! # Smoothing trade-off
//! `ad_fabs(x, C) = sqrt(x² + C)` is smooth at zero with value `√C`, and has
//! a bias of about `C / (2|x|)` for `|x| ≫ √C`. A larger `C` smooths more and
//! biases more; `ad_min`/`ad_max` inherit both properties.
use crate::numeric::primitives::{exp, log, sqrt};
use crate::numeric::scalar::Scalar;

/// Default smoothing constant for [`ad_fabs`], [`ad_min`], [`ad_max`].
pub const AD_FABS_EPS: f64 = 1e-5;

/// General logistic curve:
/// `1 / (1 + exp(-slope · (x - inflection_point)))`.
///
/// Range `(0, 1)`, equal to `0.5` at `x = inflection_point`; increasing in
/// `x` for `slope > 0`, decreasing for `slope < 0`.
///
/// # Examples
/// ```rust
/// # use stock_assess::numeric::logistic;
/// assert_eq!(logistic(4.0_f64, 1.3, 4.0), 0.5);
/// ```
#[inline]
pub fn logistic<T: Scalar>(inflection_point: T, slope: T, x: T) -> T {
    T::one() / (T::one() + exp(-slope * (x - inflection_point)))
}

/// Double-logistic (dome) curve: ascending logistic times one minus a
/// descending logistic.
///
/// The dome shape requires `inflection_point_desc > inflection_point_asc`.
/// That is not checked; violating it yields a valid but degenerate curve.
#[inline]
pub fn double_logistic<T: Scalar>(
    inflection_point_asc: T, slope_asc: T, inflection_point_desc: T, slope_desc: T, x: T,
) -> T {
    logistic(inflection_point_asc, slope_asc, x)
        * (T::one() - logistic(inflection_point_desc, slope_desc, x))
}

/// Bounded logit: maps `x ∈ (a, b)` to `log(x - a) - log(b - x) ∈ ℝ`.
///
/// NaN or ±inf at or outside the bounds; callers guarantee `a < x < b`.
#[inline]
pub fn logit<T: Scalar>(a: T, b: T, x: T) -> T {
    log(x - a) - log(b - x)
}

/// Inverse of [`logit`]: maps `v ∈ ℝ` to `a + (b - a) / (1 + exp(-v))`.
///
/// Strictly inside `(a, b)` for every finite `v` (up to floating-point
/// saturation for very large `|v|`).
///
/// # Examples
/// ```rust
/// # use stock_assess::numeric::{inv_logit, logit};
/// let x = inv_logit(0.1_f64, 0.9, logit(0.1, 0.9, 0.35));
/// assert!((x - 0.35).abs() < 1e-12);
/// ```
#[inline]
pub fn inv_logit<T: Scalar>(a: T, b: T, v: T) -> T {
    a + (b - a) / (T::one() + exp(-v))
}

/// Smooth absolute value `sqrt(x² + C)` with the default `C`.
#[inline]
pub fn ad_fabs<T: Scalar>(x: T) -> T {
    ad_fabs_with(x, T::from_f64(AD_FABS_EPS))
}

/// Smooth absolute value `sqrt(x² + c)` with an explicit constant.
#[inline]
pub fn ad_fabs_with<T: Scalar>(x: T, c: T) -> T {
    sqrt(x * x + c)
}

/// Smooth minimum with the default `C`.
#[inline]
pub fn ad_min<T: Scalar>(a: T, b: T) -> T {
    ad_min_with(a, b, T::from_f64(AD_FABS_EPS))
}

/// Smooth minimum `(a + b - ad_fabs(a - b, c)) / 2`.
#[inline]
pub fn ad_min_with<T: Scalar>(a: T, b: T, c: T) -> T {
    (a + b - ad_fabs_with(a - b, c)) * T::from_f64(0.5)
}

/// Smooth maximum with the default `C`.
#[inline]
pub fn ad_max<T: Scalar>(a: T, b: T) -> T {
    ad_max_with(a, b, T::from_f64(AD_FABS_EPS))
}

/// Smooth maximum `(a + b + ad_fabs(a - b, c)) / 2`.
#[inline]
pub fn ad_max_with<T: Scalar>(a: T, b: T, c: T) -> T {
    (a + b + ad_fabs_with(a - b, c)) * T::from_f64(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::{Recording, TapeVar};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the algebraic laws of the transforms on the `f64`
    // backend, plus the tape derivatives of the smooth surrogates at the
    // kinks of |x|, min and max. Local partials of the primitives live in
    // `tape::var`.
    // -------------------------------------------------------------------------

    fn grid(lo: f64, hi: f64, n: usize) -> Vec<f64> {
        (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64).collect()
    }

    #[test]
    // Purpose
    // -------
    // `logistic` equals one half at the inflection point by construction.
    //
    // Given
    // -----
    // - Several (inflection, slope) pairs including a negative slope.
    //
    // Expect
    // ------
    // - logistic(infl, slope, infl) == 0.5 exactly.
    fn logistic_is_one_half_at_inflection() {
        for &(infl, slope) in &[(0.0, 1.0), (4.5, 2.2), (-3.0, 0.1), (7.0, -1.5)] {
            assert_eq!(logistic(infl, slope, infl), 0.5);
        }
    }

    #[test]
    // Purpose
    // -------
    // `logistic` is increasing for positive slope and decreasing for
    // negative slope.
    //
    // Given
    // -----
    // - Inflection 5.0, slopes ±0.8, x on [0, 10].
    //
    // Expect
    // ------
    // - Consecutive values strictly increase (resp. decrease) and stay in
    //   (0, 1).
    fn logistic_monotone_in_x() {
        let xs = grid(0.0, 10.0, 41);
        for w in xs.windows(2) {
            let (lo, hi) = (logistic(5.0, 0.8, w[0]), logistic(5.0, 0.8, w[1]));
            assert!(lo < hi);
            assert!(lo > 0.0 && hi < 1.0);
            assert!(logistic(5.0, -0.8, w[0]) > logistic(5.0, -0.8, w[1]));
        }
    }

    #[test]
    // Purpose
    // -------
    // `double_logistic` is the product of an ascending logistic and the
    // complement of a descending one, and is dome shaped when
    // infl_desc > infl_asc.
    //
    // Given
    // -----
    // - infl_asc = 3, slope_asc = 1.5, infl_desc = 9, slope_desc = 1.2.
    //
    // Expect
    // ------
    // - Agreement with the explicit product formula.
    // - Value near the middle exceeds both tails.
    fn double_logistic_matches_product_and_is_dome_shaped() {
        let (ia, sa, id, sd) = (3.0, 1.5, 9.0, 1.2);
        for x in grid(0.0, 12.0, 25) {
            let expected = logistic(ia, sa, x) * (1.0 - logistic(id, sd, x));
            assert_relative_eq!(double_logistic(ia, sa, id, sd, x), expected, epsilon = 1e-15);
        }
        let mid = double_logistic(ia, sa, id, sd, 6.0);
        assert!(mid > double_logistic(ia, sa, id, sd, 0.0));
        assert!(mid > double_logistic(ia, sa, id, sd, 12.0));
    }

    #[test]
    // Purpose
    // -------
    // Round-trip law and strict monotonicity of the bounded logit.
    //
    // Given
    // -----
    // - Bounds (a, b) = (-2, 5) and interior points.
    //
    // Expect
    // ------
    // - inv_logit(a, b, logit(a, b, x)) ≈ x.
    // - logit strictly increasing on the grid.
    fn logit_round_trip_and_monotone() {
        let (a, b) = (-2.0, 5.0);
        let xs = grid(-1.99, 4.99, 60);
        for &x in &xs {
            assert_relative_eq!(inv_logit(a, b, logit(a, b, x)), x, epsilon = 1e-10);
        }
        for w in xs.windows(2) {
            assert!(logit(a, b, w[0]) < logit(a, b, w[1]));
        }
    }

    #[test]
    // Purpose
    // -------
    // `inv_logit` never reaches its bounds for moderate finite inputs.
    //
    // Given
    // -----
    // - Bounds (0.2, 0.8) and v on [-30, 30].
    //
    // Expect
    // ------
    // - a < inv_logit(a, b, v) < b.
    fn inv_logit_stays_strictly_inside_bounds() {
        let (a, b) = (0.2, 0.8);
        for v in grid(-30.0, 30.0, 121) {
            let y = inv_logit(a, b, v);
            assert!(y > a && y < b, "v = {v}, y = {y}");
        }
    }

    #[test]
    // Purpose
    // -------
    // `logit` is undefined at and outside the bounds and reports it through
    // non-finite values, never through a panic.
    //
    // Given
    // -----
    // - x = a, x = b, and x outside (a, b).
    //
    // Expect
    // ------
    // - Results are non-finite.
    fn logit_off_domain_is_non_finite() {
        assert!(!logit(0.0, 1.0, 0.0_f64).is_finite());
        assert!(!logit(0.0, 1.0, 1.0_f64).is_finite());
        assert!(logit(0.0, 1.0, 1.5_f64).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // `ad_fabs` has no singularity at zero and converges to |x| as C → 0.
    //
    // Given
    // -----
    // - C = 1e-5 at x = 0; decreasing C at x = -3.
    //
    // Expect
    // ------
    // - ad_fabs(0, C) == sqrt(C).
    // - |ad_fabs(x, C) - |x|| shrinks as C shrinks and is within C / (2|x|).
    fn ad_fabs_smooth_at_zero_and_converges() {
        assert_eq!(ad_fabs(0.0_f64), AD_FABS_EPS.sqrt());
        assert_eq!(ad_fabs_with(0.0_f64, 4.0), 2.0);

        let x = -3.0_f64;
        let mut last_err = f64::INFINITY;
        for &c in &[1e-1, 1e-3, 1e-5, 1e-8] {
            let err = (ad_fabs_with(x, c) - x.abs()).abs();
            assert!(err < last_err);
            assert!(err <= c / (2.0 * x.abs()) + 1e-15);
            last_err = err;
        }
    }

    #[test]
    // Purpose
    // -------
    // Ordering and sum laws of the smooth min/max.
    //
    // Given
    // -----
    // - Pairs (a, b) including equal values and sign changes.
    //
    // Expect
    // ------
    // - ad_min(a, b) <= (a + b) / 2 <= ad_max(a, b).
    // - ad_min(a, b) + ad_max(a, b) == a + b.
    // - For well separated pairs, ad_min/ad_max are close to min/max.
    fn ad_min_max_laws() {
        let pairs = [(1.0, 2.0), (2.0, 1.0), (-4.0, 3.5), (0.0, 0.0), (7.25, 7.25), (-1e3, 1e3)];
        for &(a, b) in &pairs {
            let lo = ad_min(a, b);
            let hi = ad_max(a, b);
            let mid = 0.5 * (a + b);
            assert!(lo <= mid && mid <= hi);
            assert_relative_eq!(lo + hi, a + b, epsilon = 1e-12, max_relative = 1e-12);
        }
        assert_abs_diff_eq!(ad_min(1.0, 2.0), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ad_max(1.0, 2.0), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ad_max_with(-4.0, 3.5, 1e-12), 3.5, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // The smooth absolute value has a finite derivative where |x| has a kink,
    // and the analytic derivative away from it.
    //
    // Given
    // -----
    // - x = 0 with the default C; x = -0.7 with C = 0.01, recorded on a tape.
    //
    // Expect
    // ------
    // - d ad_fabs/dx at 0 is exactly 0.
    // - d ad_fabs_with(x, c)/dx = x / sqrt(x² + c).
    fn ad_fabs_tape_derivative_is_finite_at_zero() {
        let rec = Recording::begin().unwrap();
        let x = rec.independent(&array![0.0]).unwrap();
        let g = rec.gradient(ad_fabs(x[0])).unwrap();
        assert!(g[0].is_finite());
        assert_eq!(g[0], 0.0);
        drop(rec);

        let (x0, c) = (-0.7_f64, 0.01_f64);
        let rec = Recording::begin().unwrap();
        let x = rec.independent(&array![x0]).unwrap();
        let g = rec.gradient(ad_fabs_with(x[0], TapeVar::constant(c))).unwrap();
        assert_relative_eq!(g[0], x0 / (x0 * x0 + c).sqrt(), epsilon = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // At a tie the smooth min/max split the derivative evenly between both
    // arguments instead of picking a side.
    //
    // Given
    // -----
    // - a = b = 1.3 recorded as two independents.
    //
    // Expect
    // ------
    // - ∇ad_max(a, b) = ∇ad_min(a, b) = (0.5, 0.5).
    fn ad_min_max_tape_gradient_splits_at_tie() {
        let smooth: [fn(TapeVar, TapeVar) -> TapeVar; 2] = [ad_max, ad_min];
        for f in smooth {
            let rec = Recording::begin().unwrap();
            let v = rec.independent(&array![1.3, 1.3]).unwrap();
            let g = rec.gradient(f(v[0], v[1])).unwrap();
            assert_abs_diff_eq!(g[0], 0.5, epsilon = 1e-15);
            assert_abs_diff_eq!(g[1], 0.5, epsilon = 1e-15);
        }
    }
}
