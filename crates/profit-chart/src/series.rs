// File: crates/profit-chart/src/series.rs
// Summary: Input data model and the labeled XY series carried by a chart.

/// One (input amount, profit) observation supplied by the caller.
/// Profit may be negative (a loss).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfitPoint {
    pub input_amount: f64,
    pub profit: f64,
}

impl ProfitPoint {
    pub const fn new(input_amount: f64, profit: f64) -> Self {
        Self { input_amount, profit }
    }

    /// Both fields must be finite to be plottable.
    pub fn is_finite(&self) -> bool {
        self.input_amount.is_finite() && self.profit.is_finite()
    }
}

/// Labeled XY series as handed to a renderer.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data }
    }

    pub fn from_points(label: impl Into<String>, points: &[ProfitPoint]) -> Self {
        let data = points.iter().map(|p| (p.input_amount, p.profit)).collect();
        Self::new(label, data)
    }
}
