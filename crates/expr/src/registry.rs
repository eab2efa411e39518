//! The fixed vocabulary of named constants and functions.
//!
//! Both tables are immutable statics. The parser resolves identifiers against
//! them once, at parse time; evaluation never looks names up again.

use std::{
    f64::consts::{E, PI},
    fmt,
};

/// Named constants recognized in expressions.
pub static CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E)];

/// Named unary functions recognized in expressions.
pub static FUNCTIONS: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("exp", Function::Exp),
    ("sqrt", Function::Sqrt),
    ("log", Function::Log),
    ("ln", Function::Ln),
    ("abs", Function::Abs),
];

/// A built-in unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Sqrt,
    /// Natural logarithm.
    Log,
    /// Natural logarithm, same as [`Function::Log`].
    Ln,
    Abs,
}

impl Function {
    /// Applies the function using IEEE semantics.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Exp => value.exp(),
            Self::Sqrt => value.sqrt(),
            Self::Log | Self::Ln => value.ln(),
            Self::Abs => value.abs(),
        }
    }

    /// Returns the name used to call this function in an expression.
    #[must_use]
    pub fn name(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find_map(|&(name, function)| (function == self).then_some(name))
            .unwrap_or("?")
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a named constant.
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find_map(|&(candidate, value)| (candidate == name).then_some(value))
}

/// Looks up a named function.
#[must_use]
pub fn function(name: &str) -> Option<Function> {
    FUNCTIONS
        .iter()
        .find_map(|&(candidate, function)| (candidate == name).then_some(function))
}

/// Returns the names of all built-in functions.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|&(name, _)| name)
}
