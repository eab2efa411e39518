//! Terminal front end for the Newton-Raphson solver.
//!
//! The `raphson` binary reads a function, its derivative, an initial guess
//! and the solver settings from the command line or from interactive
//! prompts, then prints the iteration table and the result.

pub mod args;
pub mod error;
pub mod prompt;
pub mod report;

pub use error::{CliError, Result};

use std::io::{self, BufRead, Write};

use raphson_solvers::equation::newton::{self, Solution};
use tracing::info;

use args::{Command, Problem, Source, USAGE};

/// Runs the command described by `args`, reading prompts from `input`.
///
/// # Errors
///
/// Returns an error if the arguments or prompted values are invalid, or if
/// reading or writing fails.
pub fn run<I, S, R, W>(args: I, input: &mut R, output: &mut W) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: BufRead,
    W: Write,
{
    let (source, json, plot) = match args::parse(args)? {
        Command::Help => {
            writeln!(output, "{USAGE}")?;
            return Ok(());
        }
        Command::Solve { source, json, plot } => (source, json, plot),
    };

    let problem = match source {
        Source::Args(problem) => problem,
        Source::Interactive => prompt::read_problem(input, output)?,
    };

    let solution = solve(&problem);

    if json {
        serde_json::to_writer_pretty(&mut *output, &solution)?;
        writeln!(output)?;
    } else {
        report::write_report(output, &solution)?;
    }

    if plot {
        show_plot(&problem, &solution)?;
    }

    Ok(())
}

fn solve(problem: &Problem) -> Solution {
    info!(
        function = %problem.function,
        derivative = %problem.derivative,
        x0 = problem.x0,
        epsilon = problem.config.epsilon(),
        max_iters = problem.config.max_iters(),
        "solving"
    );

    let solution = newton::solve_expressions_unobserved(
        &problem.function,
        &problem.derivative,
        problem.x0,
        &problem.config,
    );

    info!(status = ?solution.status, x = solution.x, iters = solution.iters(), "finished");
    solution
}

#[cfg(feature = "plot")]
fn show_plot(problem: &Problem, solution: &Solution) -> Result<()> {
    use raphson_expr::Expression;
    use raphson_observers::SolutionPlot;

    // An unparsable function has nothing to draw.
    let Ok(function) = Expression::parse(&problem.function) else {
        return Ok(());
    };
    SolutionPlot::new(&function, solution)
        .show()
        .map_err(|error| CliError::Plot(error.to_string()))
}

#[cfg(not(feature = "plot"))]
fn show_plot(_problem: &Problem, _solution: &Solution) -> Result<()> {
    Err(CliError::InvalidArgument(
        "--plot requires building with the `plot` feature".into(),
    ))
}

/// Runs against the process arguments and standard streams.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_std_io() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(std::env::args().skip(1), &mut stdin.lock(), &mut stdout.lock())
}
