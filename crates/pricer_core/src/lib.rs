//! # pricer_core: Numerical Foundation for the Option Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Root-finding solvers (`math::solvers`)
//! - Solver error type: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
//! let result = solver.solve(|x: f64| x * x * x - 0.125, 0.0, 1.0).unwrap();
//! assert!(result.converged);
//! # assert!((result.root - 0.5_f64).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
