//! Numerical methods.
//!
//! - `solvers`: Root-finding algorithms and their configuration

pub mod solvers;
