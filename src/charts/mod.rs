//! Charts module - Scales, formatting and chart rendering

pub mod emphasis;
pub mod format;
mod plotter;
mod renderer;
pub mod scales;

pub use emphasis::ViewFilter;
pub use plotter::{ChartData, ChartKind, ChartPlotter};
pub use renderer::StaticChartRenderer;
