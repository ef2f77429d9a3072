//! # Pricer Models (L2: Business Logic)
//!
//! European vanilla option pricing and implied volatility.
//!
//! This crate provides:
//! - Instrument definitions (`OptionKind`, `OptionContract`)
//! - Closed-form Black-Scholes pricing
//! - Implied volatility inversion by bisection
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::price;
//! use pricer_models::implied_vol::{implied_volatility, ImpliedVolConfig};
//! use pricer_models::instruments::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 95.0, 0.01, 0.5, OptionKind::Put).unwrap();
//! let quoted = price(&contract, 0.3).unwrap();
//!
//! let estimate = implied_volatility(&contract, quoted, &ImpliedVolConfig::default()).unwrap();
//! assert!((estimate.volatility().unwrap() - 0.3).abs() < 1e-4);
//! ```
//!
//! ## Design Principles
//!
//! - **Closed enums** for option kinds, matched exhaustively
//! - **Validated constructors** so pricing never produces NaN from bad input
//! - **Non-convergence is a value** (`VolatilityEstimate::NotFound`), not an error

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;
