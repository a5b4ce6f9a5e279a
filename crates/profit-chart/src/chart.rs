// File: crates/profit-chart/src/chart.rs
// Summary: Declarative chart description with axis autoscaling.

use crate::axis::Axis;
use crate::prepare::PreparedData;
use crate::series::Series;

/// Title used by the reporting pipeline.
pub const CHART_TITLE: &str = "Profit Analysis Chart";
/// Label of the single profit series.
pub const SERIES_LABEL: &str = "Profit";

/// Everything a renderer needs to draw: title, axes, one labeled series.
#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Series,
}

impl Chart {
    pub fn new(series: Series) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            series,
        }
    }

    /// Chart over a prepared dataset: fixed title and labels, axes fitted
    /// to the data bounds with a 2% margin on Y.
    pub fn from_prepared(prepared: &PreparedData) -> Self {
        let mut chart = Self::new(Series::from_points(SERIES_LABEL, &prepared.points));
        chart.autoscale_axes(0.02);
        chart
    }

    /// Fit both axis ranges to the series bounds. `margin` widens the Y
    /// range by that fraction of its span. Zero-span ranges widen by 1.0
    /// so a single point still lands inside the plot.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in &self.series.data {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            // Empty series; keep the default ranges.
            return;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }
}
