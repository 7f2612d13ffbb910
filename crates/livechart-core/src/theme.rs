// File: crates/livechart-core/src/theme.rs
// Summary: Series palette and light/dark chart colors.

use skia_safe as skia;

/// Ten-color categorical palette; series take colors by position.
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

/// Palette color for a series position (wraps after ten).
pub fn palette_color(index: usize) -> skia::Color { CATEGORY10[index % CATEGORY10.len()] }

/// `#rrggbb` form of a color, for SVG output.
pub fn hex(c: skia::Color) -> String { format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b()) }

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
    pub line_width: f32,
    /// Stroke width of a highlighted line.
    pub hover_width: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_fill: skia::Color::from_argb(255, 176, 196, 222),
            tooltip_text: skia::Color::from_argb(255, 0, 0, 0),
            line_width: 1.5,
            hover_width: 4.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_fill: skia::Color::from_argb(255, 60, 60, 70),
            tooltip_text: skia::Color::from_argb(255, 245, 245, 250),
            line_width: 1.5,
            hover_width: 4.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    [Theme::light(), Theme::dark()]
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
