//! Options for the multinomial composition likelihood.

/// MultinomialOptions — which terms the multinomial NLL reports.
///
/// Fields
/// ------
/// - `normalizing_constant`: `bool`
///   When `false` (default) only the kernel `−Σ xᵢ ln pᵢ` is returned. When
///   `true` the log multinomial coefficient is subtracted as well,
///   `−[lgamma(N + 1) − Σ lgamma(xᵢ + 1)]` with `N = Σ xᵢ`, so the value is
///   the full negative log-density.
///
/// Notes
/// -----
/// - The coefficient depends on the data only, so both settings give the
///   same gradient with respect to `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultinomialOptions {
    pub normalizing_constant: bool,
}

impl MultinomialOptions {
    /// Kernel-only options (the default).
    pub fn kernel() -> Self {
        MultinomialOptions { normalizing_constant: false }
    }

    /// Options reporting the full multinomial negative log-density.
    pub fn with_normalizing_constant() -> Self {
        MultinomialOptions { normalizing_constant: true }
    }
}
