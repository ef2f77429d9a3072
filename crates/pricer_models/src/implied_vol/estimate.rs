//! Result type of the implied volatility search.

use std::fmt;

/// Outcome of an implied volatility search.
///
/// `NotFound` is a normal result, not an error: the target could not be
/// matched within the bracket and iteration budget. It is never confused
/// with a small volatility because it carries no volatility at all.
///
/// # Examples
/// ```
/// use pricer_models::implied_vol::VolatilityEstimate;
///
/// let found = VolatilityEstimate::Converged { volatility: 0.2, iterations: 18 };
/// assert_eq!(found.volatility(), Some(0.2));
///
/// let missing = VolatilityEstimate::NotFound { iterations: 1000 };
/// assert_eq!(missing.volatility(), None);
/// assert_eq!(missing.to_string(), "not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum VolatilityEstimate {
    /// The price tolerance was met at `volatility`.
    Converged {
        /// Implied volatility σ (annualised)
        volatility: f64,
        /// Pricer evaluations used
        iterations: usize,
    },
    /// No volatility in the bracket reproduced the target.
    NotFound {
        /// Pricer evaluations used (0 when the bracket check rejected the target)
        iterations: usize,
    },
}

impl VolatilityEstimate {
    /// The implied volatility, if one was found.
    #[inline]
    pub fn volatility(&self) -> Option<f64> {
        match self {
            VolatilityEstimate::Converged { volatility, .. } => Some(*volatility),
            VolatilityEstimate::NotFound { .. } => None,
        }
    }

    /// Number of pricer evaluations performed.
    #[inline]
    pub fn iterations(&self) -> usize {
        match self {
            VolatilityEstimate::Converged { iterations, .. }
            | VolatilityEstimate::NotFound { iterations } => *iterations,
        }
    }

    /// Returns whether a volatility was found.
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, VolatilityEstimate::Converged { .. })
    }
}

impl fmt::Display for VolatilityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatilityEstimate::Converged { volatility, .. } => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, volatility),
                None => write!(f, "{}", volatility),
            },
            VolatilityEstimate::NotFound { .. } => f.write_str("not found"),
        }
    }
}
