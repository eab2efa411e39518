//! Plain-text rendering of a solution.

use std::io::{self, Write};

use raphson_solvers::equation::newton::{IterationRecord, Solution};

const RULE_WIDTH: usize = 65;

/// Writes the iteration table followed by the result summary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "{heavy}")?;
    writeln!(out, "{}", header())?;
    writeln!(out, "{light}")?;
    for record in &solution.trace {
        writeln!(out, "{}", row(record))?;
    }
    writeln!(out, "{light}")?;
    writeln!(out)?;

    if let Some(failure) = &solution.failure {
        writeln!(out, "Error: {failure}")?;
    }
    writeln!(out, "Root: {:.10}", solution.x)?;
    writeln!(out, "Iterations: {}", solution.iters())?;
    writeln!(out, "Status: {}", solution.status)?;
    Ok(())
}

fn header() -> String {
    format!("{:<5} | {:<15} | {:<15} | {:<15}", "Iter", "xn", "f(xn)", "Step")
        .trim_end()
        .to_owned()
}

/// Formats one iteration with eight decimals per value.
fn row(record: &IterationRecord) -> String {
    format!(
        "{:<5} | {:<15.8} | {:<15.8} | {:<15.8}",
        record.iter, record.x, record.fx, record.step
    )
    .trim_end()
    .to_owned()
}
