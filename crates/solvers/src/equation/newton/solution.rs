use std::fmt;

use super::{Failure, IterationRecord};

/// How a Newton-Raphson run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// A step smaller than epsilon was taken.
    Converged,

    /// The derivative magnitude fell below [`DERIVATIVE_THRESHOLD`].
    ///
    /// [`DERIVATIVE_THRESHOLD`]: super::DERIVATIVE_THRESHOLD
    ZeroDerivative,

    /// The function or derivative could not be parsed or evaluated.
    SyntaxError,

    /// Reached the iteration limit without converging.
    MaxIterationsReached,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converged => "convergence reached",
            Self::ZeroDerivative => "zero derivative (division by zero)",
            Self::SyntaxError => "syntax error in function",
            Self::MaxIterationsReached => "iteration limit reached",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: f64,

    /// Every iterate visited, starting with the initial guess.
    pub history: Vec<f64>,

    /// One record per completed iteration.
    pub trace: Vec<IterationRecord>,

    /// Why evaluation failed, when `status` is [`Status::SyntaxError`].
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_failure"))]
    pub failure: Option<Failure>,
}

impl Solution {
    /// Returns true if the run converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }
}

#[cfg(feature = "serde")]
fn serialize_failure<S>(failure: &Option<Failure>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match failure {
        Some(failure) => serializer.collect_str(failure),
        None => serializer.serialize_none(),
    }
}

/// Upper bound on the iterations preallocated for a run.
const CAPACITY_HINT: usize = 64;

/// Accumulates the history and trace of a run in progress.
pub(super) struct Progress {
    history: Vec<f64>,
    trace: Vec<IterationRecord>,
}

impl Progress {
    pub(super) fn new(x0: f64, max_iters: usize) -> Self {
        let hint = max_iters.min(CAPACITY_HINT);
        let mut history = Vec::with_capacity(hint + 1);
        history.push(x0);
        Self {
            history,
            trace: Vec::with_capacity(hint),
        }
    }

    /// Appends a completed iteration.
    pub(super) fn record(&mut self, record: IterationRecord, x_next: f64) {
        self.trace.push(record);
        self.history.push(x_next);
    }

    pub(super) fn finish(self, status: Status, x: f64) -> Solution {
        Solution {
            status,
            x,
            history: self.history,
            trace: self.trace,
            failure: None,
        }
    }

    pub(super) fn fail(self, x: f64, failure: Failure) -> Solution {
        Solution {
            failure: Some(failure),
            ..self.finish(Status::SyntaxError, x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::newton::{Cause, Role};

    fn record(iter: usize, x: f64, x_next: f64) -> IterationRecord {
        IterationRecord {
            iter,
            x,
            fx: 0.0,
            step: (x_next - x).abs(),
        }
    }

    #[test]
    fn history_starts_with_initial_guess() {
        let solution = Progress::new(1.5, 10).finish(Status::ZeroDerivative, 1.5);
        assert_eq!(solution.history, [1.5]);
        assert!(solution.trace.is_empty());
        assert_eq!(solution.iters(), 0);
        assert!(!solution.is_converged());
    }

    #[test]
    fn record_appends_to_both() {
        let mut progress = Progress::new(2.0, 10);
        progress.record(record(1, 2.0, 1.0), 1.0);
        progress.record(record(2, 1.0, 0.75), 0.75);

        let solution = progress.finish(Status::Converged, 0.75);
        assert!(solution.is_converged());
        assert_eq!(solution.history, [2.0, 1.0, 0.75]);
        assert_eq!(solution.iters(), 2);
        assert_relative_eq!(solution.trace[1].step, 0.25);
        assert!(solution.failure.is_none());
    }

    #[test]
    fn fail_sets_status_and_failure() {
        let failure = Failure::new(Role::Function, 3.0, Cause::NonFinite { value: f64::NAN });
        let solution = Progress::new(3.0, 5).fail(3.0, failure);

        assert_eq!(solution.status, Status::SyntaxError);
        assert_relative_eq!(solution.x, 3.0);
        assert!(matches!(
            solution.failure,
            Some(Failure {
                role: Role::Function,
                ..
            })
        ));
    }

    #[test]
    fn status_messages() {
        assert_eq!(Status::Converged.to_string(), "convergence reached");
        assert_eq!(
            Status::ZeroDerivative.to_string(),
            "zero derivative (division by zero)"
        );
        assert_eq!(Status::SyntaxError.to_string(), "syntax error in function");
        assert_eq!(
            Status::MaxIterationsReached.to_string(),
            "iteration limit reached"
        );
    }
}
