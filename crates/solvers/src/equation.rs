//! Solvers for equation problems: finding `x` such that `f(x) = 0`.
//!
//! Functions are supplied either as text, parsed with [`raphson_expr`], or as
//! any [`Model`] mapping `f64` to `f64`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson iteration with a user-supplied derivative
//!
//! [`Model`]: raphson_core::Model

pub mod newton;
