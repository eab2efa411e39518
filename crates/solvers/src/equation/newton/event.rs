use super::IterationRecord;

/// Event emitted by the Newton-Raphson solver after each completed iteration.
///
/// Iterations that stop on an evaluation failure or a degenerate derivative
/// do not complete and emit no event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The record appended to the trace for this iteration.
    pub record: IterationRecord,
    /// Derivative value at `record.x`.
    pub dfx: f64,
    /// The updated iterate.
    pub x_next: f64,
}

impl Event {
    /// Returns the iteration number.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.iter
    }

    /// Returns the residual `f(x)` at the iterate before the update.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.record.fx
    }
}
