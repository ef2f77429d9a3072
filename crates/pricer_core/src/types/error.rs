//! Error types for root-finding solvers.

use thiserror::Error;

/// Root-finding solver errors.
///
/// Raised before the first iteration. Running out of iterations is not an
/// error: it is reported through `BisectionResult::converged`.
///
/// # Variants
/// - `InvalidBracket`: Bracket endpoints are not finite or not ordered
/// - `InvalidConfig`: Tolerance or iteration limit out of range
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::InvalidBracket { lower: 1.0, upper: 0.5 };
/// assert_eq!(format!("{}", err), "Invalid bracket: [1, 0.5]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Bracket endpoints must be finite with `lower < upper`.
    #[error("Invalid bracket: [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower bracket endpoint
        lower: f64,
        /// Upper bracket endpoint
        upper: f64,
    },

    /// Solver configuration out of range.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}
