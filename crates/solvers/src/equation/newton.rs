//! Newton-Raphson iteration for single-variable root finding.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates `f(x)` and `f'(x)` and moves
//! to `x - f(x) / f'(x)`. The run converges when the absolute step falls
//! below `epsilon`. The residual is never checked, so a tiny `f(x)` far from
//! the root does not count as convergence.
//!
//! # Termination
//!
//! - [`Status::Converged`]: a step smaller than `epsilon` was taken
//! - [`Status::ZeroDerivative`]: `|f'(x)| < DERIVATIVE_THRESHOLD`
//! - [`Status::SyntaxError`]: an input failed to parse, raised an error, or
//!   produced NaN or an infinity (see [`Solution::failure`])
//! - [`Status::MaxIterationsReached`]: `max_iters` iterations completed
//! - [`Status::StoppedByObserver`]: the observer returned [`Action::StopEarly`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed iteration, after the record is
//! appended to the trace and before the convergence check. Iterations that end
//! in a failure or a degenerate derivative emit nothing.

mod action;
mod config;
mod evaluate;
mod event;
mod failure;
mod record;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use failure::{Cause, Failure, Role};
pub use record::IterationRecord;
pub use solution::{Solution, Status};

use raphson_core::{Model, Observer};
use raphson_expr::Expression;
use tracing::debug;

use evaluate::evaluate;
use solution::Progress;

/// Derivative magnitudes strictly below this value stop the solver.
pub const DERIVATIVE_THRESHOLD: f64 = 1e-14;

/// Finds a root of `function` using Newton-Raphson iteration.
///
/// `derivative` must evaluate `f'(x)`; it is not checked against `function`.
/// The observer receives an [`Event`] for each completed iteration.
/// See the [module docs](self) for termination rules.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    F: Model<Input = f64, Output = f64>,
    D: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    let mut progress = Progress::new(x0, config.max_iters());
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let evaluated = evaluate(function, Role::Function, x)
            .and_then(|fx| Ok((fx, evaluate(derivative, Role::Derivative, x)?)));

        let (fx, dfx) = match evaluated {
            Ok(values) => values,
            Err(failure) => {
                debug!(iter, x, %failure, "evaluation failed");
                return progress.fail(x, failure);
            }
        };

        if dfx.abs() < DERIVATIVE_THRESHOLD {
            debug!(iter, x, dfx, "derivative below threshold");
            return progress.finish(Status::ZeroDerivative, x);
        }

        let x_next = x - fx / dfx;
        let step = (x_next - x).abs();
        let record = IterationRecord { iter, x, fx, step };
        progress.record(record, x_next);
        debug!(iter, x, fx, dfx, x_next, step, "iteration");

        let event = Event {
            record,
            dfx,
            x_next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, x = x_next, "stopped by observer");
            return progress.finish(Status::StoppedByObserver, x_next);
        }

        if step < config.epsilon() {
            debug!(iter, x = x_next, step, "converged");
            return progress.finish(Status::Converged, x_next);
        }

        x = x_next;
    }

    debug!(max_iters = config.max_iters(), x, "iteration limit reached");
    progress.finish(Status::MaxIterationsReached, x)
}

/// Finds a root of `function` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<F, D>(function: &F, derivative: &D, x0: f64, config: &Config) -> Solution
where
    F: Model<Input = f64, Output = f64>,
    D: Model<Input = f64, Output = f64>,
{
    solve(function, derivative, x0, config, ())
}

/// Finds a root of the expression `function` given the text of its derivative.
///
/// Both texts are parsed before iterating. If either fails, the solution has
/// [`Status::SyntaxError`], `x == x0`, a history of `[x0]`, and an empty trace.
pub fn solve_expressions<Obs>(
    function: &str,
    derivative: &str,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let parse = |source: &str, role: Role| {
        Expression::parse(source).map_err(|error| {
            debug!(%role, source, %error, "expression rejected");
            Failure::new(role, x0, Cause::Parse(error))
        })
    };

    let parsed = parse(function, Role::Function)
        .and_then(|f| Ok((f, parse(derivative, Role::Derivative)?)));

    match parsed {
        Ok((f, df)) => solve(&f, &df, x0, config, observer),
        Err(failure) => Progress::new(x0, 0).fail(x0, failure),
    }
}

/// Finds a root of the expression `function` without observer support.
///
/// This is a convenience wrapper around [`solve_expressions`] that uses a
/// no-op observer.
pub fn solve_expressions_unobserved(
    function: &str,
    derivative: &str,
    x0: f64,
    config: &Config,
) -> Solution {
    solve_expressions(function, derivative, x0, config, ())
}
