// File: crates/profit-chart/src/prepare.rs
// Summary: Dataset validation, sort by input amount, and profit statistics.

use crate::error::ChartError;
use crate::series::ProfitPoint;

/// Aggregate profit statistics over a prepared dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfitStats {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

/// Sorted points plus their statistics, ready for charting and reporting.
#[derive(Clone, Debug)]
pub struct PreparedData {
    pub points: Vec<ProfitPoint>,
    pub stats: ProfitStats,
}

/// Validate and sort the caller's points by ascending input amount, then
/// derive max/min/mean profit. The input slice is left untouched; sorting
/// happens on a copy. Equal input amounts keep their input order.
pub fn prepare(points: &[ProfitPoint]) -> Result<PreparedData, ChartError> {
    if points.is_empty() {
        return Err(ChartError::Validation(
            "empty dataset: at least one data point is required".to_string(),
        ));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(ChartError::Validation(format!(
            "non-finite value at data point {} ({}, {})",
            i, points[i].input_amount, points[i].profit
        )));
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.input_amount.total_cmp(&b.input_amount));

    let stats = profit_stats(&sorted);
    Ok(PreparedData { points: sorted, stats })
}

/// Max/min/mean folds over profit. Order-independent; `prepare` guarantees
/// a non-empty, finite input.
fn profit_stats(points: &[ProfitPoint]) -> ProfitStats {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0f64;
    for p in points {
        max = max.max(p.profit);
        min = min.min(p.profit);
        sum += p.profit;
    }
    ProfitStats {
        max,
        min,
        mean: sum / points.len() as f64,
    }
}
