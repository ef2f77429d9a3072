//! Implied volatility inversion.
//!
//! Recovers the Black-Scholes volatility that reproduces an observed option
//! price by bisection over a configurable bracket (default [0.01, 1.00]).
//!
//! - [`ImpliedVolConfig`]: bracket, tolerance, iteration budget
//! - [`ImpliedVolSolver`] / [`implied_volatility`]: the search
//! - [`VolatilityEstimate`]: `Converged` or `NotFound`

mod config;
mod estimate;
mod solver;

pub use config::{ImpliedVolConfig, DEFAULT_LOWER_VOL, DEFAULT_UPPER_VOL};
pub use estimate::VolatilityEstimate;
pub use solver::{implied_volatility, ImpliedVolSolver};
