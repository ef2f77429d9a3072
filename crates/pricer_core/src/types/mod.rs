//! Core error types.
//!
//! [`SolverError`] is re-exported at this module level.

pub mod error;

pub use error::SolverError;
