//! Interactive visualizations of Newton-Raphson runs.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- curve
//! cargo run --example plot --features plot -- curve 0.5
//! cargo run --example plot --features plot -- trace
//! ```
//!
//! # Modes
//!
//! - **curve [x0]**: Solve `x³ − 2x − 5 = 0` and draw the iterates on the
//!   curve of f, with the root marked. The default start is `x0 = 2`; try
//!   `0.5` to watch the first steps wander before settling near 2.0946.
//!
//! - **trace**: Solve `cos(x) = x` and plot the iterate and `|f(x)|` per
//!   iteration on a log scale, showing quadratic convergence.

use std::error::Error;

use raphson_expr::Expression;
use raphson_observers::{PlotObserver, ShowConfig, SolutionPlot};
use raphson_solvers::equation::newton::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "curve".into());
    match mode.as_str() {
        "curve" => {
            let x0 = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid initial guess, expected a number such as 0.5");
                    std::process::exit(1);
                })
                .unwrap_or(2.0);
            curve(x0)
        }
        "trace" => trace(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [curve [x0]|trace]");
            std::process::exit(1);
        }
    }
}

/// Draws a cubic's iterates over its curve.
fn curve(x0: f64) -> Result<(), Box<dyn Error>> {
    let function = Expression::parse("x^3 - 2*x - 5")?;
    let derivative = Expression::parse("3*x^2 - 2")?;

    let solution = newton::solve_unobserved(&function, &derivative, x0, &Config::default());
    println!("{}: x = {:.10}", solution.status, solution.x);

    SolutionPlot::new(&function, &solution).show()?;
    Ok(())
}

/// Plots per-iteration progress toward the Dottie number.
fn trace() -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["x", "|f(x)|"]);
    let config = Config::new(1e-12, 50)?;

    let solution = newton::solve_expressions("cos(x) - x", "-sin(x) - 1", 1.0, &config, &mut obs);
    println!("{}: x = {:.10}", solution.status, solution.x);

    obs.show(
        ShowConfig::new()
            .title("Newton-Raphson: cos(x) = x  →  Dottie number ≈ 0.7391")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
