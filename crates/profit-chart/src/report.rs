// File: crates/profit-chart/src/report.rs
// Summary: Report pipeline: render the chart to a PNG file, then print the console summary.

use std::path::{Path, PathBuf};

use crate::chart::Chart;
use crate::error::ChartError;
use crate::prepare::{prepare, PreparedData};
use crate::render::{RenderOptions, Renderer, SkiaRenderer};
use crate::series::ProfitPoint;
use crate::table::Table;
use crate::theme::Theme;

/// Output filename used when the caller does not pick one.
pub const DEFAULT_FILENAME: &str = "line-chart.png";

/// One-shot chart + console report generator. Canvas size, theme and the
/// rendering backend are fixed at construction.
pub struct ProfitReporter {
    opts: RenderOptions,
    renderer: Box<dyn Renderer>,
}

impl ProfitReporter {
    /// 800x600 canvas, dark theme, Skia backend.
    pub fn new() -> Self {
        Self {
            opts: RenderOptions::default(),
            renderer: Box::new(SkiaRenderer::new()),
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.opts.width = width;
        self.opts.height = height;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.opts.theme = theme;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Validate, sort and chart `points`, write the PNG to
    /// `<cwd>/<filename>`, then print the summary table and statistics.
    /// The image buffer is written in a single call, so a render failure
    /// leaves no partial file and prints nothing.
    pub fn generate(
        &self,
        points: &[ProfitPoint],
        filename: impl AsRef<Path>,
    ) -> Result<PathBuf, ChartError> {
        let prepared = prepare(points)?;
        let chart = Chart::from_prepared(&prepared);
        let png = self.renderer.render(&chart, &self.opts)?;

        let path = std::env::current_dir()?.join(filename.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &png)?;

        println!("✅ Chart saved successfully as: {}", path.display());
        println!();
        print!("{}", format_summary(&prepared));
        Ok(path)
    }

    /// Same pipeline with the default output filename.
    pub fn generate_default(&self, points: &[ProfitPoint]) -> Result<PathBuf, ChartError> {
        self.generate(points, DEFAULT_FILENAME)
    }
}

impl Default for ProfitReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Console summary: data table followed by the statistics block.
/// Pure string construction; `generate` prints it only after the image
/// file is on disk.
pub fn format_summary(prepared: &PreparedData) -> String {
    let mut table = Table::new(vec!["Input Amount", "Profit"]);
    for p in &prepared.points {
        table.add_row(vec![money(p.input_amount), money(p.profit)]);
    }

    let stats = &prepared.stats;
    let mut out = String::from("📊 Data Summary:\n");
    out.push_str(&table.render());
    out.push('\n');
    out.push_str("📈 Statistics:\n");
    out.push_str(&format!("   Max Profit: ${:.2}\n", stats.max));
    out.push_str(&format!("   Min Profit: ${:.2}\n", stats.min));
    out.push_str(&format!("   Avg Profit: ${:.2}\n", stats.mean));
    out
}

fn money(v: f64) -> String {
    format!("$ {:>10.2}", v)
}
