// File: crates/profit-chart/src/lib.rs
// Summary: Library entry point; exports the preparation, chart and report API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod types;
pub mod theme;
pub mod prepare;
pub mod render;
pub mod table;
pub mod report;
pub mod error;

pub use chart::{Chart, CHART_TITLE, SERIES_LABEL};
pub use series::{ProfitPoint, Series};
pub use axis::Axis;
pub use theme::Theme;
pub use prepare::{prepare, PreparedData, ProfitStats};
pub use render::{RenderOptions, Renderer, SkiaRenderer};
pub use report::{format_summary, ProfitReporter, DEFAULT_FILENAME};
pub use error::ChartError;
