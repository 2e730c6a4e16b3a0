//! Configuration for gradient checks.
use crate::verification::errors::{VerifyError, VerifyResult};
use crate::verification::validation::verify_tol;
use std::str::FromStr;

/// Finite-difference scheme used for the reference gradient.
///
/// Variants:
/// - `Forward`: one extra evaluation per coordinate, `O(h)` truncation error.
/// - `Central`: two extra evaluations per coordinate, `O(h²)` truncation
///   error.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"forward"`, `"central"`). Unknown names return
/// `VerifyError::InvalidScheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FdScheme {
    Forward,
    #[default]
    Central,
}

impl FromStr for FdScheme {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(FdScheme::Forward),
            "central" => Ok(FdScheme::Central),
            _ => Err(VerifyError::InvalidScheme {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'forward' or 'central'.",
            }),
        }
    }
}

/// Gradient-check configuration.
///
/// Fields:
/// - `scheme: FdScheme`: finite-difference scheme for the reference gradient.
/// - `abs_tol: f64`: a coordinate passes when `|tape − fd| ≤ abs_tol`, or
/// - `rel_tol: f64`: when `|tape − fd| ≤ rel_tol · max(|tape|, |fd|)`.
///
/// Default:
/// - `scheme`: `Central`
/// - `abs_tol`: `1e-6`
/// - `rel_tol`: `1e-5`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOptions {
    pub scheme: FdScheme,
    pub abs_tol: f64,
    pub rel_tol: f64,
}

impl CheckOptions {
    /// Construct validated check options.
    ///
    /// # Errors
    /// [`VerifyError::InvalidTolerance`] if either tolerance is non-finite
    /// or not strictly positive.
    pub fn new(scheme: FdScheme, abs_tol: f64, rel_tol: f64) -> VerifyResult<Self> {
        verify_tol("absolute", abs_tol)?;
        verify_tol("relative", rel_tol)?;
        Ok(Self { scheme, abs_tol, rel_tol })
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { scheme: FdScheme::Central, abs_tol: 1e-6, rel_tol: 1e-5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Scheme names parse case-insensitively; unknown names are rejected.
    //
    // Given
    // -----
    // - "Forward", "CENTRAL", "backward".
    //
    // Expect
    // ------
    // - Forward, Central, then `InvalidScheme` echoing the input.
    fn scheme_parsing() {
        assert_eq!("Forward".parse::<FdScheme>().unwrap(), FdScheme::Forward);
        assert_eq!("CENTRAL".parse::<FdScheme>().unwrap(), FdScheme::Central);
        match "backward".parse::<FdScheme>() {
            Err(VerifyError::InvalidScheme { name, .. }) => assert_eq!(name, "backward"),
            other => panic!("Expected InvalidScheme, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `CheckOptions::new` validates both tolerances; the default is valid.
    //
    // Given
    // -----
    // - Valid tolerances, then a zero relative tolerance.
    //
    // Expect
    // ------
    // - First succeeds; second fails naming the relative tolerance.
    fn options_validate_tolerances() {
        let opts = CheckOptions::new(FdScheme::Forward, 1e-4, 1e-3).unwrap();
        assert_eq!(opts.scheme, FdScheme::Forward);
        let d = CheckOptions::default();
        assert_eq!(CheckOptions::new(d.scheme, d.abs_tol, d.rel_tol).unwrap(), d);

        match CheckOptions::new(FdScheme::Central, 1e-6, 0.0) {
            Err(VerifyError::InvalidTolerance { name, .. }) => assert_eq!(name, "relative"),
            other => panic!("Expected InvalidTolerance, got {other:?}"),
        }
    }
}
