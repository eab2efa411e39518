//! Reusable observers for the Raphson solvers.
//!
//! This crate provides `Observer` implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing solver behavior and
//!   [`SolutionPlot`] for drawing a finished run over the curve of `f`.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, SolutionPlot};
