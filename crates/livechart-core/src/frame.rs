// File: crates/livechart-core/src/frame.rs
// Summary: Scene sampled at one clock instant; the input to PNG and SVG output.

use skia_safe as skia;

use crate::axis::AxisLayout;
use crate::geometry::PathGeometry;
use crate::tooltip::Tooltip;
use crate::types::Insets;

#[derive(Clone, Debug)]
pub struct LineSnapshot {
    pub id: String,
    pub name: String,
    pub color: skia::Color,
    pub highlighted: bool,
    pub geometry: PathGeometry,
}

#[derive(Clone, Debug)]
pub struct MarkerSnapshot {
    pub id: String,
    pub color: skia::Color,
    pub cx: f64,
    pub cy: f64,
    pub r: f32,
}

/// Everything drawn for one instant. Line and marker coordinates are
/// plot-local; the tooltip is in page coordinates.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub margins: Insets,
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub lines: Vec<LineSnapshot>,
    pub markers: Vec<MarkerSnapshot>,
    pub tooltip: Option<Tooltip>,
}

impl Frame {
    pub fn line(&self, name: &str) -> Option<&LineSnapshot> { self.lines.iter().find(|l| l.name == name) }
}
