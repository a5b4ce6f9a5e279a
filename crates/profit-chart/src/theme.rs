// File: crates/profit-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            marker_fill: skia::Color::from_argb(255, 32, 120, 200),
        }
    }
}
