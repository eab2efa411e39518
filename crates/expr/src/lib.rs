//! Safe evaluation of single-variable math expressions.
//!
//! An [`Expression`] is parsed once from text such as `x^3 - 2*x - 5` and can
//! then be evaluated at any real `x`. Parsing compiles the text into a small
//! postfix program over a fixed vocabulary, so evaluation never reaches
//! anything outside that vocabulary.
//!
//! # Grammar
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'x' | constant | function '(' expr ')' | '(' expr ')'
//! ```
//!
//! - `^` is right-associative and binds tighter than unary minus, so `-x^2`
//!   is `-(x^2)` and `2^3^2` is `2^9`.
//! - Constants: `pi`, `e`.
//! - Functions: `sin`, `cos`, `tan`, `exp`, `sqrt`, `log`, `ln`, `abs`.
//!   Both `log` and `ln` are the natural logarithm.
//!
//! # Numeric semantics
//!
//! Evaluation follows IEEE 754 double precision. Out-of-domain calls such as
//! `sqrt(-1)`, `ln(0)` or `1/0` produce NaN or an infinity rather than an
//! error. Deciding whether a non-finite value is acceptable is left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use raphson_expr::Expression;
//!
//! let f: Expression = "x^3 - 2*x - 5".parse().unwrap();
//! assert_eq!(f.eval(2.0), -1.0);
//! assert_eq!(f.eval_many(&[0.0, 1.0]), vec![-5.0, -6.0]);
//! ```

mod error;
mod expression;
mod lexer;
mod parser;
mod program;
pub mod registry;

pub use error::{ParseError, ParseErrorKind};
pub use expression::Expression;
pub use registry::Function;

/// Parses `expression` and evaluates it at `x`.
///
/// Non-finite results are returned as `Ok`; only malformed input is an error.
///
/// # Errors
///
/// Returns a [`ParseError`] if `expression` is not well formed.
pub fn parse_and_evaluate(expression: &str, x: f64) -> Result<f64, ParseError> {
    Ok(Expression::parse(expression)?.eval(x))
}

/// Parses `expression` once and evaluates it at each value in `xs`.
///
/// Results are identical to calling [`parse_and_evaluate`] for each element.
///
/// # Errors
///
/// Returns a [`ParseError`] if `expression` is not well formed.
pub fn evaluate_vectorized(expression: &str, xs: &[f64]) -> Result<Vec<f64>, ParseError> {
    Ok(Expression::parse(expression)?.eval_many(xs))
}
