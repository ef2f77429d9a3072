//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal distribution functions
//! - Error types for pricing and inversion
//!
//! ## Design Principles
//!
//! - **Validate once**: domain checks happen in constructors, pricing is
//!   pure arithmetic afterwards
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in both tails

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
