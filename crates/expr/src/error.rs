use thiserror::Error;

use crate::registry::Function;

/// An expression that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the source where the problem was detected.
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// The reasons an expression can fail to parse.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("malformed number")]
    MalformedNumber,

    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),

    #[error("unexpected `{0}`")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParen,

    #[error("function `{0}` must be called as `{0}(...)`")]
    MissingCallParen(Function),

    #[error("function `{0}` takes exactly one argument")]
    FunctionArity(Function),

    #[error("`{0}` is not a function")]
    NotCallable(String),

    #[error("expression is nested too deeply")]
    TooDeep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = ParseError::new(ParseErrorKind::UnknownIdentifier("y".into()), 4);
        assert_eq!(err.to_string(), "unknown identifier `y` at position 4");
    }

    #[test]
    fn display_names_the_function() {
        let err = ParseError::new(ParseErrorKind::FunctionArity(Function::Sqrt), 0);
        assert_eq!(
            err.to_string(),
            "function `sqrt` takes exactly one argument at position 0"
        );
    }
}
