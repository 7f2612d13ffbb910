// File: crates/livechart-core/src/svg.rs
// Summary: SVG document projection of a sampled frame.

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{AxisLayout, Orient};
use crate::error::{ChartError, Result};
use crate::frame::Frame;
use crate::theme::hex;

impl Frame {
    /// SVG markup for the frame. `chart_id` prefixes the svg and clip ids.
    pub fn to_svg(&self, chart_id: &str) -> String {
        let mut out = String::new();
        let m = self.margins;
        let (w, h) = (self.plot_width, self.plot_height);
        let clip = format!("{chart_id}_clip");

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{chart_id}_svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        let _ = writeln!(out, r#"<g transform="translate({},{})" pointer-events="all">"#, m.left, m.top);
        let _ = writeln!(
            out,
            r#"<clipPath id="{clip}"><rect id="{clip}-rect" width="{w}" height="{h}"/></clipPath>"#
        );

        out.push_str("<g>\n");
        write_axis(&mut out, &self.x_axis, h);
        write_axis(&mut out, &self.y_axis, h);
        out.push_str("</g>\n");

        for line in &self.lines {
            let class = if line.highlighted { "line hover" } else { "line" };
            let color = hex(line.color);
            let _ = writeln!(
                out,
                r#"<path id="{}" class="{class}" clip-path="url(#{clip})" d="{}" fill="none" stroke="{color}"/>"#,
                line.id,
                line.geometry.to_svg_d()
            );
        }
        for mk in &self.markers {
            let color = hex(mk.color);
            let _ = writeln!(
                out,
                r#"<circle id="{}" r="{}" clip-path="url(#{clip})" cx="{:.3}" cy="{:.3}" fill="{color}" stroke="{color}"/>"#,
                mk.id, mk.r, mk.cx, mk.cy
            );
        }
        out.push_str("</g>\n");

        if let Some(tip) = &self.tooltip {
            let _ = writeln!(
                out,
                r#"<text class="tooltip" x="{}" y="{}" opacity="{}">{}</text>"#,
                tip.left,
                tip.top,
                tip.opacity,
                escape(&tip.text)
            );
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn render_to_svg(&self, chart_id: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
        std::fs::write(path, self.to_svg(chart_id)).map_err(|e| ChartError::io(path, e))
    }
}

fn write_axis(out: &mut String, axis: &AxisLayout, plot_height: f64) {
    let size = axis.tick_size;
    match axis.orient {
        Orient::Bottom => {
            let _ = writeln!(out, r#"<g class="x axis" transform="translate(0,{plot_height})">"#);
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"<g class="tick" transform="translate({:.3},0)"><line y2="{size}"/><text y="{}">{}</text></g>"#,
                    t.offset, axis.label_offset, escape(&t.label)
                );
            }
        }
        Orient::Left => {
            out.push_str("<g class=\"y axis\">\n");
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"<g class="tick" transform="translate(0,{:.3})"><line x2="{}"/><text x="-{}">{}</text></g>"#,
                    t.offset, -size, axis.label_offset, escape(&t.label)
                );
            }
        }
    }
    out.push_str("</g>\n");
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
