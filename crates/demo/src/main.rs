// File: crates/demo/src/main.rs
// Summary: Demo renders the sample profit dataset (or a CSV) to a PNG plus console summary.

use anyhow::{Context, Result};
use profit_chart::{ProfitPoint, ProfitReporter};
use std::path::Path;

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to the built-in sample
    let points = match std::env::args().nth(1) {
        Some(raw) => {
            println!("Using input file: {raw}");
            let points = load_points_csv(Path::new(&raw))
                .with_context(|| format!("failed to load CSV '{raw}'"))?;
            println!("Loaded {} data points", points.len());
            points
        }
        None => sample_points(),
    };

    let reporter = ProfitReporter::new().with_size(1000, 700);
    reporter.generate(&points, "profit-analysis-chart.png")?;
    Ok(())
}

fn sample_points() -> Vec<ProfitPoint> {
    vec![
        ProfitPoint::new(1000.0, 150.0),
        ProfitPoint::new(2000.0, 280.0),
        ProfitPoint::new(3000.0, 450.0),
        ProfitPoint::new(4000.0, 580.0),
        ProfitPoint::new(5000.0, 750.0),
        ProfitPoint::new(6000.0, 820.0),
        ProfitPoint::new(7000.0, 950.0),
        ProfitPoint::new(8000.0, 1100.0),
        ProfitPoint::new(9000.0, 1180.0),
        ProfitPoint::new(10000.0, 1350.0),
    ]
}

/// Load (input_amount, profit) rows from a headered CSV. Header names are
/// matched loosely; rows that fail to parse are skipped.
fn load_points_csv(path: &Path) -> Result<Vec<ProfitPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_amount = idx(&["input_amount", "input amount", "input", "amount", "x"])
        .context("no input amount column found")?;
    let i_profit = idx(&["profit", "y"]).context("no profit column found")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> {
            rec.get(i).and_then(|s| s.trim().parse::<f64>().ok())
        };
        if let (Some(amount), Some(profit)) = (parse(i_amount), parse(i_profit)) {
            out.push(ProfitPoint::new(amount, profit));
        }
    }

    if out.is_empty() {
        anyhow::bail!("no data points loaded — check headers/delimiter.");
    }
    Ok(out)
}
