//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bracketing method for non-decreasing functions,
//!   used to invert monotone pricing functions such as Black-Scholes in σ
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-6)
//! - `max_iterations`: Maximum iteration count (default: 1000)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let result = solver.solve(|x: f64| x - 0.25, 0.0, 1.0).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.root - 0.25).abs() < 1e-6);
//! ```

mod bisection;
mod config;

pub use bisection::{BisectionResult, BisectionSolver};
pub use config::SolverConfig;
