//! biology — biological sub-model functors.
//!
//! Currently the maturity ogives ([`LogisticMaturity`],
//! [`DoubleLogisticCurve`]) behind the [`MaturityModel`] functor interface.
//! All are generic over [`Scalar`](crate::numeric::Scalar), contain no
//! validation or logging, and are evaluated identically on `f64` and on the
//! tape scalar.

pub mod maturity;

pub use self::maturity::{DoubleLogisticCurve, LogisticMaturity, MaturityModel};
