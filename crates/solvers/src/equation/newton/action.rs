/// Actions an observer can take during Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration.
    ///
    /// The iteration that triggered the event is kept in the trace and its
    /// updated iterate becomes the reported root estimate.
    StopEarly,
}
