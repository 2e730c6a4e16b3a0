//! tape — thread-local reverse-mode AD runtime.
//!
//! Purpose
//! -------
//! Supply the tape scalar that the generic numeric core is instantiated with
//! when gradients are needed, together with the recording lifecycle and a
//! host-side driver that turns a generic objective into `(value, ∇value)`.
//!
//! Key behaviors
//! -------------
//! - [`TapeVar`] implements [`Scalar`](crate::numeric::Scalar); every
//!   operation on live variables appends one node with its local partials.
//! - [`Recording`] owns the active tape of the current thread, registers
//!   independents, and runs the reverse sweep.
//! - [`TapeVec`] is the plain index-addressed buffer the runtime uses for its
//!   own bookkeeping (nodes, adjoints, gradient output).
//! - [`value_and_grad`] evaluates a [`DualObjective`] once on a fresh tape.
//!
//! Invariants & assumptions
//! ------------------------
//! - At most one recording per thread. Tapes are never shared across threads.
//! - Node references carry the epoch of their tape; references from another
//!   tape are constants, never aliases.
//! - Numeric problems (NaN, ±inf) are not tape errors and flow through the
//!   sweep unchanged.
//!
//! Conventions
//! -----------
//! - Errors are lifecycle misuse only and surface as [`TapeError`].
//! - Only [`value_and_grad`] logs (at `debug` and `warn`); the recorder and
//!   the scalar type are silent.
//!
//! Testing notes
//! -------------
//! - `var` checks every local derivative rule against a closed form.
//! - `recording` covers the lifecycle: one recording per thread, stale
//!   values, constant outputs.
//! - `gradient` checks the driver on Rosenbrock and log-sum-exp.

pub mod errors;
pub mod gradient;
pub(crate) mod recorder;
pub mod recording;
pub mod tape_vec;
pub mod var;

pub use self::errors::{TapeError, TapeResult};
pub use self::gradient::{value, value_and_grad, DualObjective};
pub use self::recording::Recording;
pub use self::tape_vec::TapeVec;
pub use self::var::TapeVar;

pub mod prelude {
    pub use super::errors::{TapeError, TapeResult};
    pub use super::gradient::{value, value_and_grad, DualObjective};
    pub use super::recording::Recording;
    pub use super::tape_vec::TapeVec;
    pub use super::var::TapeVar;
}
