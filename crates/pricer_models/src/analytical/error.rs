//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing and inversion

use pricer_core::types::SolverError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for contract construction, pricing
/// and implied volatility inversion. Every domain violation is reported
/// before any arithmetic runs, so no NaN ever leaves the pricer.
///
/// Non-convergence of the implied volatility search is not an error; see
/// [`VolatilityEstimate::NotFound`](crate::implied_vol::VolatilityEstimate::NotFound).
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or non-finite).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Non-finite target price handed to the implied volatility solver.
    #[error("Invalid target price: {price}")]
    InvalidTargetPrice {
        /// The invalid target price
        price: f64,
    },

    /// Option kind outside {call, put}.
    #[error("Unknown option kind: '{kind}' (expected 'call' or 'put')")]
    UnknownOptionKind {
        /// The rejected input
        kind: String,
    },

    /// Invalid search bracket or solver configuration.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = 0");
    }

    #[test]
    fn test_unknown_option_kind_display() {
        let err = AnalyticalError::UnknownOptionKind {
            kind: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unknown option kind: 'straddle' (expected 'call' or 'put')"
        );
    }

    #[test]
    fn test_solver_error_is_transparent() {
        let err: AnalyticalError = SolverError::InvalidBracket {
            lower: 1.0,
            upper: 0.01,
        }
        .into();
        assert_eq!(format!("{}", err), "Invalid bracket: [1, 0.01]");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
