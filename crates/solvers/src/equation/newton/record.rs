/// Diagnostics for one completed Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationRecord {
    /// Iteration number, starting at 1.
    pub iter: usize,
    /// Iterate before the update.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// Absolute step `|x_next - x|`.
    pub step: f64,
}
