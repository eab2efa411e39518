use std::{error::Error as StdError, fmt, sync::Arc};

use raphson_expr::ParseError;
use thiserror::Error;

/// Which of the two solver inputs failed to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Role {
    /// The function `f(x)`.
    Function,
    /// The derivative `f'(x)`.
    Derivative,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("f(x)"),
            Self::Derivative => f.write_str("f'(x)"),
        }
    }
}

/// Why an evaluation stopped the solver.
///
/// The solver reports every cause with the same [`Status::SyntaxError`];
/// this type keeps the distinction for diagnostics.
///
/// [`Status::SyntaxError`]: super::Status::SyntaxError
#[derive(Debug, Clone, Error)]
pub enum Cause {
    /// The expression text could not be parsed.
    #[error("invalid expression: {0}")]
    Parse(ParseError),

    /// The evaluation produced NaN or an infinity.
    #[error("non-finite value {value}")]
    NonFinite { value: f64 },

    /// A user-supplied model returned an error.
    #[error("model call failed: {0}")]
    Model(Arc<dyn StdError + Send + Sync>),
}

/// An evaluation failure, with the input and point where it happened.
#[derive(Debug, Clone, Error)]
#[error("{role} failed at x = {x}: {cause}")]
pub struct Failure {
    pub role: Role,
    pub x: f64,
    pub cause: Cause,
}

impl Failure {
    pub(super) fn new(role: Role, x: f64, cause: Cause) -> Self {
        Self { role, x, cause }
    }
}
