// File: crates/profit-chart/src/render.rs
// Summary: Renderer trait and the Skia CPU raster implementation producing PNG bytes.

use skia_safe as skia;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

/// Rendering collaborator: turns a chart description into encoded PNG
/// bytes. Implementations own all rasterization details, so any backend
/// can stand in for the default Skia one.
pub trait Renderer {
    fn render(&self, chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>, ChartError>;
}

/// CPU raster renderer backed by Skia.
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SkiaRenderer {
    fn render(&self, chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".to_string()))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left;
        let plot_right = opts.width - opts.insets.right;
        let plot_top = opts.insets.top;
        let plot_bottom = opts.height - opts.insets.bottom;

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, chart, theme);
        draw_series(canvas, plot_left, plot_top, plot_right, plot_bottom, chart, theme);
        draw_titles(canvas, opts, chart, theme);

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("PNG encode failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- drawing helpers --------------------------------------------------------

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, chart: &Chart, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    // Axis labels
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    canvas.draw_str(
        &chart.x_axis.label,
        (r as f32 - 120.0, b as f32 + 28.0),
        &font,
        &paint_text,
    );
    canvas.draw_str(
        &chart.y_axis.label,
        (l as f32 - 60.0, t as f32 - 10.0),
        &font,
        &paint_text,
    );
}

fn draw_series(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, chart: &Chart, theme: &Theme) {
    let data = &chart.series.data;
    if data.is_empty() {
        return;
    }

    // Scale helpers
    let x_axis = &chart.x_axis;
    let y_axis = &chart.y_axis;
    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.line_stroke);
        canvas.draw_path(&path, &stroke);
    }

    // Point markers; a single-point series still shows up as a dot.
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);
    for &(x, y) in data {
        canvas.draw_circle((sx(x), sy(y)), 3.0, &fill);
    }
}

fn draw_titles(canvas: &skia::Canvas, opts: &RenderOptions, chart: &Chart, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.title);
    let mut font = skia::Font::default();
    font.set_size(18.0);

    // Rough centering for the default font (~half of size per glyph)
    let title_w = chart.title.chars().count() as f32 * 9.0;
    let tx = (opts.width as f32 - title_w) * 0.5;
    canvas.draw_str(&chart.title, (tx.max(4.0), 28.0), &font, &paint);

    // Series legend: a short stroke sample next to the label, inside the plot
    let lx = (opts.insets.left + 12) as f32;
    let ly = (opts.insets.top + 18) as f32;
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_stroke_width(2.0);
    swatch.set_color(theme.line_stroke);
    canvas.draw_line((lx, ly - 4.0), (lx + 18.0, ly - 4.0), &swatch);

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.axis_label);
    let mut label_font = skia::Font::default();
    label_font.set_size(13.0);
    canvas.draw_str(&chart.series.label, (lx + 24.0, ly), &label_font, &label_paint);
}
