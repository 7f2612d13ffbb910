// File: crates/livechart-core/src/raster.rs
// Summary: Headless PNG rendering of a sampled frame using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::axis::{AxisLayout, Orient};
use crate::error::{ChartError, Result};
use crate::frame::{Frame, LineSnapshot, MarkerSnapshot};
use crate::geometry::PathCommand;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

const LABEL_SIZE: f32 = 11.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Tick labels and tooltip text; off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self { Self { theme: Theme::default(), draw_labels: true } }
}

impl Frame {
    /// Rasterize into a fresh surface.
    pub fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or(ChartError::Surface { width: self.width, height: self.height })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        canvas.save();
        canvas.translate((self.margins.left as f32, self.margins.top as f32));
        let (w, h) = (self.plot_width as f32, self.plot_height as f32);

        draw_axis(canvas, &self.x_axis, w, h, theme, opts.draw_labels);
        draw_axis(canvas, &self.y_axis, w, h, theme, opts.draw_labels);

        // Lines and markers are clipped to the plot rectangle.
        canvas.save();
        canvas.clip_rect(skia::Rect::from_wh(w, h), skia::ClipOp::Intersect, true);
        for line in &self.lines {
            draw_line(canvas, line, theme);
        }
        for marker in &self.markers {
            draw_marker(canvas, marker);
        }
        canvas.restore();
        canvas.restore();

        if let Some(tip) = self.tooltip.as_ref().filter(|t| t.is_visible()) {
            if opts.draw_labels {
                draw_tooltip(canvas, tip, theme);
            }
        }
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`, creating parent dirs.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
        std::fs::write(path, bytes).map_err(|e| ChartError::io(path, e))
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn label_font() -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(LABEL_SIZE);
    font
}

fn draw_axis(canvas: &skia::Canvas, axis: &AxisLayout, w: f32, h: f32, theme: &Theme, labels: bool) {
    let grid = stroke_paint(theme.grid, 1.0);
    let line = stroke_paint(theme.axis_line, 1.0);
    let text = fill_paint(theme.axis_label);
    let font = label_font();
    let reach = (-axis.tick_size) as f32;

    match axis.orient {
        Orient::Bottom => {
            for tick in &axis.ticks {
                let x = tick.offset as f32;
                if !(0.0..=w).contains(&x) {
                    continue;
                }
                canvas.draw_line((x, h), (x, h - reach), &grid);
                if labels {
                    let (tw, _) = font.measure_str(&tick.label, Some(&text));
                    let baseline = h + axis.label_offset as f32 + LABEL_SIZE * 0.71;
                    canvas.draw_str(&tick.label, (x - tw * 0.5, baseline), &font, &text);
                }
            }
            canvas.draw_line((0.0, h), (w, h), &line);
        }
        Orient::Left => {
            for tick in &axis.ticks {
                let y = tick.offset as f32;
                canvas.draw_line((0.0, y), (reach, y), &grid);
                if labels {
                    let (tw, _) = font.measure_str(&tick.label, Some(&text));
                    let x = -(axis.label_offset as f32) - tw;
                    canvas.draw_str(&tick.label, (x, y + LABEL_SIZE * 0.32), &font, &text);
                }
            }
            canvas.draw_line((0.0, 0.0), (0.0, h), &line);
        }
    }
}

fn draw_line(canvas: &skia::Canvas, line: &LineSnapshot, theme: &Theme) {
    if line.geometry.is_empty() {
        return;
    }
    if !line.geometry.is_finite() {
        log::warn!("skipping {}: geometry has non-finite coordinates", line.id);
        return;
    }
    let p = |pt: (f64, f64)| (pt.0 as f32, pt.1 as f32);
    let mut path = skia::Path::new();
    for cmd in &line.geometry.commands {
        match *cmd {
            PathCommand::MoveTo(a) => { path.move_to(p(a)); }
            PathCommand::LineTo(a) => { path.line_to(p(a)); }
            PathCommand::CubicTo(c1, c2, a) => { path.cubic_to(p(c1), p(c2), p(a)); }
        }
    }
    let width = if line.highlighted { theme.hover_width } else { theme.line_width };
    canvas.draw_path(&path, &stroke_paint(line.color, width));
}

fn draw_marker(canvas: &skia::Canvas, marker: &MarkerSnapshot) {
    if !(marker.cx.is_finite() && marker.cy.is_finite()) {
        return;
    }
    let center = (marker.cx as f32, marker.cy as f32);
    canvas.draw_circle(center, marker.r, &fill_paint(marker.color));
    canvas.draw_circle(center, marker.r, &stroke_paint(marker.color, 1.0));
}

fn draw_tooltip(canvas: &skia::Canvas, tip: &Tooltip, theme: &Theme) {
    let alpha = (tip.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let font = label_font();
    let mut text = fill_paint(theme.tooltip_text);
    text.set_alpha(alpha);
    let (tw, _) = font.measure_str(&tip.text, Some(&text));
    let (left, top) = (tip.left as f32, tip.top as f32);
    let rect = skia::Rect::from_xywh(left, top, tw + 8.0, LABEL_SIZE + 8.0);
    let mut bg = fill_paint(theme.tooltip_fill);
    bg.set_alpha(alpha);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);
    canvas.draw_str(&tip.text, (left + 4.0, top + 4.0 + LABEL_SIZE * 0.8), &font, &text);
}
