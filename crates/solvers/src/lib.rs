//! Numerical solvers for the Raphson workspace.
//!
//! # Modules
//!
//! - [`equation`]: root finding for single-variable equations

pub mod equation;
