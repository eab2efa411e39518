use std::{convert::Infallible, fmt, str::FromStr};

use raphson_core::Model;

use crate::{error::ParseError, parser, program::Program};

/// A parsed math expression over the single variable `x`.
///
/// Expressions are immutable once parsed. Evaluation is a pure function of
/// `x`: repeated calls with the same argument return bit-identical results,
/// and an `Expression` can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    program: Program,
}

impl Expression {
    /// Parses an expression from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let program = parser::parse(source)?;
        Ok(Self {
            source: source.to_owned(),
            program,
        })
    }

    /// Returns the text this expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// The result may be NaN or infinite when `x` is outside the domain of an
    /// operation in the expression.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.program.run(x, &mut Vec::new())
    }

    /// Evaluates the expression at each value in `xs`.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        let mut stack = Vec::new();
        xs.iter().map(|&x| self.program.run(x, &mut stack)).collect()
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Expressions never fail once parsed; non-finite values are returned as-is.
impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(self.eval(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{E, PI};

    use approx::assert_relative_eq;

    fn eval(source: &str, x: f64) -> f64 {
        Expression::parse(source).expect("valid expression").eval(x)
    }

    #[test]
    fn arithmetic_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_relative_eq!(eval("24 / 4 / 3", 0.0), 2.0);
        assert_relative_eq!(eval("2 * x / 4", 6.0), 3.0);
    }

    #[test]
    fn power_binds_right_and_tighter_than_negation() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("(-x)^2", 3.0), 9.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
        assert_relative_eq!(eval("2*x^2", 3.0), 18.0);
    }

    #[test]
    fn repeated_negation() {
        assert_relative_eq!(eval("--x", 2.0), 2.0);
        assert_relative_eq!(eval("-(-(-x))", 2.0), -2.0);
        assert_relative_eq!(eval("3 - -x", 2.0), 5.0);
    }

    #[test]
    fn constants_and_functions() {
        assert_relative_eq!(eval("pi", 0.0), PI);
        assert_relative_eq!(eval("e", 0.0), E);
        assert_relative_eq!(eval("cos(pi)", 0.0), -1.0);
        assert_relative_eq!(eval("tan(pi/4)", 0.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(eval("exp(1)", 0.0), E, epsilon = 1e-15);
        assert_relative_eq!(eval("sqrt(x)", 16.0), 4.0);
        assert_relative_eq!(eval("log(e^2)", 0.0), 2.0, epsilon = 1e-15);
        assert_relative_eq!(eval("ln(x)", E), 1.0, epsilon = 1e-15);
        assert_relative_eq!(eval("abs(x - 5)", 2.0), 3.0);
        assert_relative_eq!(eval("sin(cos(x))", 0.0), 1.0_f64.sin());
    }

    #[test]
    fn cubic_from_the_prompt() {
        let f = Expression::parse("x^3 - 2*x - 5").expect("valid expression");
        assert_relative_eq!(f.eval(2.0), -1.0);
        assert_relative_eq!(f.eval(3.0), 16.0);
    }

    #[test]
    fn non_finite_results_are_values() {
        assert!(eval("1/x", 0.0).is_infinite());
        assert!(eval("sqrt(x)", -1.0).is_nan());
        assert!(eval("log(x)", -1.0).is_nan());
        assert_eq!(eval("ln(x)", 0.0), f64::NEG_INFINITY);
        assert!(eval("0/0", 0.0).is_nan());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let f = Expression::parse("sin(x)^2 + exp(-x)/3").expect("valid expression");
        let first = f.eval(0.7);
        for _ in 0..10 {
            assert_eq!(f.eval(0.7).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn eval_many_matches_eval() {
        let f = Expression::parse("x^2 - 2").expect("valid expression");
        let xs = [-1.5, 0.0, 1.0, 1.5, f64::NAN];
        let many = f.eval_many(&xs);

        assert_eq!(many.len(), xs.len());
        for (&x, y) in xs.iter().zip(&many) {
            assert_eq!(f.eval(x).to_bits(), y.to_bits());
        }
        assert!(f.eval_many(&[]).is_empty());
    }

    #[test]
    fn keeps_source_text() {
        let f: Expression = "  x^2 ".parse().expect("valid expression");
        assert_eq!(f.source(), "  x^2 ");
        assert_eq!(f.to_string(), "  x^2 ");
    }

    #[test]
    fn is_a_model() {
        let f = Expression::parse("x + 1").expect("valid expression");
        assert_eq!(f.call(&1.0), Ok(2.0));
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expression>();
    }
}
