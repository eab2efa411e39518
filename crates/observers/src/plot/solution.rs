use raphson_expr::Expression;
use raphson_solvers::equation::newton::Solution;

use super::{PlotApp, Series, ShowConfig, Style};

/// Horizontal padding around the visited iterates.
const MARGIN: f64 = 2.0;

/// Number of points sampled along the curve.
const SAMPLES: usize = 200;

/// The curve of `f`, the iterates Newton-Raphson visited, and the final root.
///
/// The curve is sampled over the span of the history, padded by two units on
/// each side. Samples where `f` is NaN or infinite are dropped.
///
/// # Example
///
/// ```ignore
/// let f = Expression::parse("x^3 - 2*x - 5")?;
/// let solution = newton::solve_expressions_unobserved(f.source(), "3*x^2 - 2", 2.0, &config);
/// SolutionPlot::new(&f, &solution).show()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionPlot {
    title: String,
    curve: Vec<[f64; 2]>,
    iterates: Vec<[f64; 2]>,
    root: Option<[f64; 2]>,
}

impl SolutionPlot {
    /// Samples `function` around the iterates of `solution`.
    #[must_use]
    pub fn new(function: &Expression, solution: &Solution) -> Self {
        let (lo, hi) = solution
            .history
            .iter()
            .filter(|x| x.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        let xs = if lo <= hi {
            linspace(lo - MARGIN, hi + MARGIN, SAMPLES)
        } else {
            Vec::new()
        };
        let curve = finite_points(&xs, &function.eval_many(&xs));
        let iterates = finite_points(&solution.history, &function.eval_many(&solution.history));

        let fx = function.eval(solution.x);
        let root = (solution.x.is_finite() && fx.is_finite()).then_some([solution.x, fx]);

        Self {
            title: format!("Newton-Raphson: f(x) = {function}"),
            curve,
            iterates,
            root,
        }
    }

    /// Opens a blocking egui window showing the figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let mut series = vec![
            Series::line("f(x)", self.curve),
            Series {
                name: "iterations".into(),
                points: self.iterates.clone(),
                style: Style::Dashed,
            },
            Series {
                name: "iterates".into(),
                points: self.iterates,
                style: Style::Markers { radius: 3 },
            },
        ];
        if let Some([x, fx]) = self.root {
            series.push(Series {
                name: format!("root: {x:.4}"),
                points: vec![[x, fx]],
                style: Style::Markers { radius: 6 },
            });
        }

        let mut app = PlotApp::new(series, &ShowConfig::new().legend());
        app.zero_line = true;
        app.run(self.title)
    }
}

/// Returns `n` evenly spaced values from `start` to `end` inclusive.
#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn finite_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| [x, y])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use raphson_solvers::equation::newton::{self, Config};

    fn solved(f: &str, df: &str, x0: f64) -> (Expression, Solution) {
        let function = Expression::parse(f).expect("valid expression");
        let solution = newton::solve_expressions_unobserved(f, df, x0, &Config::default());
        (function, solution)
    }

    #[test]
    fn linspace_includes_endpoints() {
        let xs = linspace(-1.0, 1.0, 5);
        assert_eq!(xs, [-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 4.0, 1), [3.0]);
    }

    #[test]
    fn curve_spans_history_with_margin() {
        let (f, solution) = solved("x^3 - 2*x - 5", "3*x^2 - 2", 2.0);
        let plot = SolutionPlot::new(&f, &solution);

        assert_eq!(plot.curve.len(), SAMPLES);
        assert_relative_eq!(plot.curve[0][0], 2.0 - MARGIN);
        assert_relative_eq!(plot.curve[SAMPLES - 1][0], 2.1 + MARGIN, epsilon = 1e-12);
        assert_eq!(plot.iterates.len(), solution.history.len());
        assert_eq!(plot.title, "Newton-Raphson: f(x) = x^3 - 2*x - 5");

        let [x, fx] = plot.root.expect("finite root");
        assert_relative_eq!(x, solution.x);
        assert!(fx.abs() < 1e-6);
    }

    #[test]
    fn drops_non_finite_samples() {
        // ln is NaN for x <= 0, which the padded window always reaches here.
        let (f, solution) = solved("ln(x) - 1", "1/x", 1.0);
        let plot = SolutionPlot::new(&f, &solution);

        assert!(plot.curve.len() < SAMPLES);
        assert!(plot.curve.iter().all(|[x, y]| *x > 0.0 && y.is_finite()));
    }

    #[test]
    fn failed_run_without_iterates() {
        let f = Expression::parse("x").expect("valid expression");
        let solution = newton::solve_expressions_unobserved("x", "1/x", 0.0, &Config::default());
        let plot = SolutionPlot::new(&f, &solution);

        assert_eq!(plot.iterates, [[0.0, 0.0]]);
        assert_eq!(plot.root, Some([0.0, 0.0]));
    }
}
