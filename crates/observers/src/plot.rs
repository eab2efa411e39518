//! Plotting observer for visualizing solver behavior.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage, and [`SolutionPlot`] for
//! the curve-and-iterates figure of a finished Newton-Raphson run.

mod solution;

pub use solution::SolutionPlot;

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Points};
use raphson_core::Observer;
use raphson_solvers::equation::newton;

/// Configuration for rendering a plot window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Newton-Raphson").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive y values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip only that trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// Plots the updated iterate and the absolute residual against iteration.
impl Plottable<2> for newton::Event {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter() as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x_next), Some(self.residual().abs())]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Pass `&mut PlotObserver` as
/// the observer of any solver whose event implements [`Plottable<N>`], or wrap
/// it in a closure and call [`record`][PlotObserver::record] directly.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["x", "|f(x)|"]);
/// newton::solve_expressions("x^3 - 2*x - 5", "3*x^2 - 2", 2.0, &config, &mut obs);
/// obs.show(ShowConfig::new().title("Newton-Raphson").legend().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let lines = self
            .names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Series::line(name, points))
            .collect();

        PlotApp::new(lines, &config).run(config.title.unwrap_or_default())
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Line,
    Dashed,
    Markers { radius: u8 },
}

/// A named set of points drawn in one style.
#[derive(Debug, Clone, PartialEq)]
struct Series {
    name: String,
    points: Vec<[f64; 2]>,
    style: Style,
}

impl Series {
    fn line(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            style: Style::Line,
        }
    }
}

/// The egui [`eframe::App`] that renders collected series.
struct PlotApp {
    series: Vec<Series>,
    legend: bool,
    log_y: bool,
    zero_line: bool,
}

impl PlotApp {
    fn new(series: Vec<Series>, config: &ShowConfig) -> Self {
        Self {
            series,
            legend: config.legend,
            log_y: config.log_y,
            zero_line: false,
        }
    }

    fn run(self, title: String) -> Result<(), eframe::Error> {
        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("raphson_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                if self.zero_line {
                    plot_ui.hline(HLine::new(0.0));
                }
                for series in &self.series {
                    let points: PlotPoints = if log_y {
                        series
                            .points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        series.points.iter().copied().collect()
                    };
                    let name = series.name.as_str();
                    match series.style {
                        Style::Line => plot_ui.line(Line::new(points).name(name)),
                        Style::Dashed => plot_ui.line(
                            Line::new(points)
                                .name(name)
                                .style(egui_plot::LineStyle::dashed_loose()),
                        ),
                        Style::Markers { radius } => {
                            let markers = Points::new(points).radius(f32::from(radius));
                            plot_ui.points(markers.name(name));
                        }
                    }
                }
            });
        });
    }
}
