//! vector — the model-facing dynamic array.
//!
//! [`DualVector`] is the single sequence type model code stores parameters,
//! observations, and derived quantities in. It is a thin wrapper over
//! `Vec<T>` with lossless conversions to and from the two other
//! representations the crate deals in:
//!
//! - `ndarray::Array1<T>`, the form gradients and parameter vectors take at
//!   the host boundary;
//! - [`TapeVec<T>`](crate::tape::TapeVec), the tape runtime's bookkeeping
//!   buffer.
//!
//! Checked access (`at`, `insert`, `erase`) reports [`VectorError`]; plain
//! indexing panics out of range, as slices do.

pub mod dual_vector;
pub mod errors;

pub use self::dual_vector::DualVector;
pub use self::errors::{VectorError, VectorResult};
