//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can drive any solver whose events and actions
//! implement them.
//!
//! # Example
//!
//! ```rust
//! use raphson_core::Observer;
//! use raphson_observers::traits::{CanStopEarly, HasResidual};
//! use raphson_solvers::equation::newton::{self, Config, Status};
//!
//! /// Stops once the residual is small, even if the step is still large.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let solution = newton::solve_expressions(
//!     "x^2 - 2",
//!     "2*x",
//!     1.0,
//!     &Config::default(),
//!     GoodEnough { tolerance: 1e-3 },
//! );
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! ```

use raphson_solvers::equation::newton;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.record.fx
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
