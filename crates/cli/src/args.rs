//! Command-line argument parsing.

use raphson_expr::Expression;
use raphson_solvers::equation::newton::Config;

use crate::{CliError, Result};

pub const USAGE: &str = "\
Usage: raphson [F DF [X0 [EPSILON [MAX_ITER]]]] [--json] [--plot]

Finds a root of F using Newton-Raphson iteration with derivative DF.
With no positional arguments, prompts for each value.

Arguments:
  F          function of x, e.g. \"x^3 - 2*x - 5\"
  DF         derivative of F, e.g. \"3*x^2 - 2\"
  X0         initial guess (default 1)
  EPSILON    step tolerance (default 1e-4)
  MAX_ITER   iteration limit (default 20)

Options:
  --json     print the solution as JSON
  --plot     open a plot of the run (requires the `plot` feature)
  -h, --help print this message";

/// Initial guess used when `X0` is omitted.
pub const DEFAULT_X0: f64 = 1.0;

/// A fully specified problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub function: String,
    pub derivative: String,
    pub x0: f64,
    pub config: Config,
}

/// Where the problem comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Read each value from stdin.
    Interactive,
    /// Given on the command line.
    Args(Problem),
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Solve { source: Source, json: bool, plot: bool },
}

/// Parses the arguments following the program name.
///
/// An argument starting with `--` that is not a known flag is an option
/// only if it does not parse as an expression, so `--x` is a value.
///
/// # Errors
///
/// Returns an error for unknown options, a function without a derivative,
/// too many positional arguments, or values that are not valid numbers.
pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut json = false;
    let mut plot = false;
    let mut positional = Vec::new();

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => json = true,
            "--plot" => plot = true,
            // Values such as "-1.5", "-x^2 + 4" or "--x" are positional.
            option if option.starts_with("--") && Expression::parse(option).is_err() => {
                return Err(CliError::InvalidArgument(format!("unknown option '{option}'")));
            }
            _ => positional.push(arg),
        }
    }

    let source = match positional.len() {
        0 => Source::Interactive,
        1 => {
            return Err(CliError::InvalidArgument(
                "a derivative is required after the function".into(),
            ));
        }
        2..=5 => Source::Args(problem(positional)?),
        n => {
            return Err(CliError::InvalidArgument(format!(
                "expected at most 5 positional arguments, got {n}"
            )));
        }
    };

    Ok(Command::Solve { source, json, plot })
}

fn problem(positional: Vec<String>) -> Result<Problem> {
    let mut values = positional.into_iter();
    let function = values.next().unwrap_or_default();
    let derivative = values.next().unwrap_or_default();

    let x0 = values
        .next()
        .map(|v| parse_number("x0", &v))
        .transpose()?
        .unwrap_or(DEFAULT_X0);

    let defaults = Config::default();
    let epsilon = values
        .next()
        .map(|v| parse_number("epsilon", &v))
        .transpose()?
        .unwrap_or(defaults.epsilon());
    let max_iters = values
        .next()
        .map(|v| parse_count("max_iter", &v))
        .transpose()?
        .unwrap_or(defaults.max_iters());

    Ok(Problem {
        function,
        derivative,
        x0,
        config: Config::new(epsilon, max_iters)?,
    })
}

/// Parses a finite floating-point value.
///
/// # Errors
///
/// Returns [`CliError::InvalidNumber`] if `value` is not a finite number.
pub fn parse_number(name: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::InvalidNumber {
            name,
            value: value.to_owned(),
        })
}

/// Parses a non-negative integer count.
///
/// # Errors
///
/// Returns [`CliError::InvalidNumber`] if `value` is not a whole number.
pub fn parse_count(name: &'static str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidNumber {
            name,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve_args(args: &[&str]) -> (Problem, bool) {
        match parse(args.iter().copied()).expect("valid arguments") {
            Command::Solve {
                source: Source::Args(problem),
                json,
                ..
            } => (problem, json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_arguments_is_interactive() {
        let command = parse(Vec::<String>::new()).expect("valid arguments");
        assert_eq!(
            command,
            Command::Solve {
                source: Source::Interactive,
                json: false,
                plot: false,
            }
        );
    }

    #[test]
    fn json_flag_with_interactive_input() {
        let command = parse(["--json"]).expect("valid arguments");
        assert!(matches!(
            command,
            Command::Solve {
                source: Source::Interactive,
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn defaults_fill_missing_values() {
        let (problem, json) = solve_args(&["x^2 - 2", "2*x"]);
        assert_eq!(problem.function, "x^2 - 2");
        assert_eq!(problem.derivative, "2*x");
        assert_relative_eq!(problem.x0, DEFAULT_X0);
        assert_eq!(problem.config, Config::default());
        assert!(!json);
    }

    #[test]
    fn all_positional_values() {
        let (problem, json) =
            solve_args(&["x^3 - 2*x - 5", "3*x^2 - 2", "2", "1e-8", "50", "--json"]);
        assert_relative_eq!(problem.x0, 2.0);
        assert_relative_eq!(problem.config.epsilon(), 1e-8);
        assert_eq!(problem.config.max_iters(), 50);
        assert!(json);
    }

    #[test]
    fn negative_initial_guess_is_a_value() {
        let (problem, _) = solve_args(&["x^2 - 2", "2*x", "-1.5"]);
        assert_relative_eq!(problem.x0, -1.5);
    }

    #[test]
    fn leading_minus_expression_is_a_value() {
        let (problem, _) = solve_args(&["-x^2 + 4", "-2*x", "1"]);
        assert_eq!(problem.function, "-x^2 + 4");
        assert_eq!(problem.derivative, "-2*x");
    }

    #[test]
    fn double_negation_is_a_value() {
        let (problem, _) = solve_args(&["--x - 2", "--1", "--json"]);
        assert_eq!(problem.function, "--x - 2");
        assert_eq!(problem.derivative, "--1");

        let (problem, _) = solve_args(&["--x", "1"]);
        assert_eq!(problem.function, "--x");
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(["x", "--help"]).expect("valid arguments"), Command::Help);
        assert_eq!(parse(["-h"]).expect("valid arguments"), Command::Help);
    }

    #[test]
    fn rejects_function_without_derivative() {
        assert!(matches!(parse(["x^2"]), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(matches!(
            parse(["x", "1", "--verbose"]),
            Err(CliError::InvalidArgument(msg)) if msg.contains("--verbose")
        ));
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(matches!(
            parse(["x", "1", "0", "1e-4", "20", "extra"]),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse(["x", "1", "two"]),
            Err(CliError::InvalidNumber { name: "x0", .. })
        ));
        assert!(matches!(
            parse(["x", "1", "0", "inf"]),
            Err(CliError::InvalidNumber { name: "epsilon", .. })
        ));
        assert!(matches!(
            parse(["x", "1", "0", "1e-4", "2.5"]),
            Err(CliError::InvalidNumber { name: "max_iter", .. })
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(matches!(
            parse(["x", "1", "0", "-1e-4"]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            parse(["x", "1", "0", "1e-4", "0"]),
            Err(CliError::Config(_))
        ));
    }
}
