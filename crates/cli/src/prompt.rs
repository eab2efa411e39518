//! Interactive entry of a problem, one value per line.

use std::io::{BufRead, Write};

use raphson_expr::registry;
use raphson_solvers::equation::newton::Config;

use crate::{
    CliError, Result,
    args::{DEFAULT_X0, Problem, parse_count, parse_number},
};

/// Prints input instructions, then reads a problem from `input`.
///
/// Blank numeric answers take the default shown in brackets.
///
/// # Errors
///
/// Returns an error if reading or writing fails, input ends early, a number
/// is malformed, or the resulting config is invalid.
pub fn read_problem<R, W>(input: &mut R, output: &mut W) -> Result<Problem>
where
    R: BufRead,
    W: Write,
{
    let functions: Vec<_> = registry::function_names().collect();
    let constants: Vec<_> = registry::CONSTANTS.iter().map(|(name, _)| *name).collect();
    writeln!(output, "Newton-Raphson root finder")?;
    writeln!(output, "  variable:  x")?;
    writeln!(output, "  operators: + - * / ^")?;
    writeln!(output, "  functions: {}", functions.join(", "))?;
    writeln!(output, "  constants: {}", constants.join(", "))?;
    writeln!(output, "  example:   x^3 - 2*x - 5")?;
    writeln!(output)?;

    let function = ask(input, output, "f(x)", "f(x): ")?;
    let derivative = ask(input, output, "f'(x)", "f'(x): ")?;

    let defaults = Config::default();
    let x0 = ask_or(input, output, "x0", DEFAULT_X0, |v| parse_number("x0", v))?;
    let epsilon = ask_or(input, output, "epsilon", defaults.epsilon(), |v| {
        parse_number("epsilon", v)
    })?;
    let max_iters = ask_or(input, output, "max iterations", defaults.max_iters(), |v| {
        parse_count("max_iter", v)
    })?;

    Ok(Problem {
        function,
        derivative,
        x0,
        config: Config::new(epsilon, max_iters)?,
    })
}

/// Writes `prompt` and returns the next line without surrounding whitespace.
fn ask<R, W>(input: &mut R, output: &mut W, what: &'static str, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof(what));
    }
    Ok(line.trim().to_owned())
}

fn ask_or<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    what: &'static str,
    default: T,
    parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: std::fmt::Display,
    F: FnOnce(&str) -> Result<T>,
{
    let answer = ask(input, output, what, &format!("{what} [{default}]: "))?;
    if answer.is_empty() {
        Ok(default)
    } else {
        parse(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn read(text: &str) -> (Result<Problem>, String) {
        let mut output = Vec::new();
        let result = read_problem(&mut text.as_bytes(), &mut output);
        (result, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn reads_every_value() {
        let (problem, output) = read("x^3 - 2*x - 5\n3*x^2 - 2\n2\n1e-6\n30\n");
        let problem = problem.expect("valid input");

        assert_eq!(problem.function, "x^3 - 2*x - 5");
        assert_eq!(problem.derivative, "3*x^2 - 2");
        assert_relative_eq!(problem.x0, 2.0);
        assert_relative_eq!(problem.config.epsilon(), 1e-6);
        assert_eq!(problem.config.max_iters(), 30);

        assert!(output.contains("functions: sin, cos, tan, exp, sqrt, log, ln, abs"));
        assert!(output.contains("constants: pi, e"));
        assert!(output.contains("epsilon [0.0001]: "));
        assert!(output.contains("max iterations [20]: "));
    }

    #[test]
    fn blank_answers_take_defaults() {
        let (problem, _) = read("  cos(x) - x  \n-sin(x) - 1\n\n\n\n");
        let problem = problem.expect("valid input");

        assert_eq!(problem.function, "cos(x) - x");
        assert_relative_eq!(problem.x0, DEFAULT_X0);
        assert_eq!(problem.config, Config::default());
    }

    #[test]
    fn malformed_number_is_reported() {
        let (problem, _) = read("x\n1\nabc\n");
        assert!(matches!(
            problem,
            Err(CliError::InvalidNumber { name: "x0", ref value }) if value == "abc"
        ));
    }

    #[test]
    fn early_end_of_input() {
        let (problem, _) = read("x^2 - 2\n");
        assert!(matches!(problem, Err(CliError::UnexpectedEof("f'(x)"))));
    }
}
