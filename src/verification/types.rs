//! Shared `ndarray` aliases for parameter vectors and derivatives.
use ndarray::{Array1, Array2};

/// Point in unconstrained parameter space.
pub type Theta = Array1<f64>;

/// Gradient vector, index-aligned with [`Theta`].
pub type Grad = Array1<f64>;

/// Dense `dim × dim` second-derivative matrix.
pub type Hessian = Array2<f64>;
