// File: crates/livechart-core/src/renderer.rs
// Summary: Per-series line elements, hover markers, and the animated refresh cycle.

use skia_safe as skia;

use crate::axis::AxisLayout;
use crate::config::ChartConfig;
use crate::data::DataWindow;
use crate::frame::{Frame, LineSnapshot, MarkerSnapshot};
use crate::geometry::PathGeometry;
use crate::scale::{Millis, ScaleManager, TimeScale, ViewportScales};
use crate::series::{SeriesRegistry, SeriesState};
use crate::transition::{Transition, Tween};
use crate::types::{line_id, marker_id, Insets};

/// Lifecycle of one series' line element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineState {
    Absent,
    Visible,
    Hidden,
}

/// Drawn path for one series.
#[derive(Clone, Debug)]
pub struct LineElement {
    pub name: String,
    pub id: String,
    pub color: skia::Color,
    /// Carries the `hover` class while set.
    pub highlighted: bool,
    pub hidden: bool,
    pub geometry: Tween<PathGeometry>,
}

/// Hover marker bound to one data point of one series.
#[derive(Clone, Debug)]
pub struct Marker {
    pub id: String,
    pub series: String,
    pub color: skia::Color,
    pub timestamp: Millis,
    pub value: f64,
    pub radius: f32,
    pub center: Tween<(f64, f64)>,
}

/// Result of one refresh, for logging and callers that track the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefreshSummary {
    pub domain: (Millis, Millis),
    pub lines_updated: usize,
    pub markers_moved: usize,
    pub transition: Transition,
}

pub struct ChartRenderer {
    scales: ScaleManager,
    window: DataWindow,
    lines: Vec<LineElement>,
    markers: Vec<Marker>,
    /// Animated x-domain the axis is drawn from.
    x_domain: Tween<(f64, f64)>,
    width: i32,
    height: i32,
    margins: Insets,
    x_ticks: usize,
    y_ticks: usize,
    transition_ms: f64,
    refresh_interval_ms: Millis,
    marker_radius: f32,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig, session_start: Millis) -> Self {
        let scales = ScaleManager::new(
            config.plot_width(),
            config.plot_height(),
            config.y_domain,
            session_start,
            config.window_ms,
        );
        let (start, end) = scales.scales().x.domain();
        Self {
            scales,
            window: DataWindow::new(),
            lines: Vec::new(),
            markers: Vec::new(),
            x_domain: Tween::fixed((start as f64, end as f64)),
            width: config.width,
            height: config.height,
            margins: config.margins,
            x_ticks: config.x_ticks,
            y_ticks: config.y_ticks,
            transition_ms: config.transition_ms,
            refresh_interval_ms: config.refresh_interval_ms,
            marker_radius: config.marker_radius,
        }
    }

    pub fn scales(&self) -> ViewportScales { self.scales.scales() }
    pub fn scale_manager(&self) -> &ScaleManager { &self.scales }
    pub fn window(&self) -> &DataWindow { &self.window }

    /// Target x-domain (where the axis ends up once transitions finish).
    pub fn x_domain(&self) -> (Millis, Millis) { self.scales.scales().x.domain() }

    pub fn lines(&self) -> &[LineElement] { &self.lines }
    pub fn line(&self, name: &str) -> Option<&LineElement> { self.lines.iter().find(|l| l.name == name) }

    pub fn line_state(&self, name: &str) -> LineState {
        match self.line(name) {
            None => LineState::Absent,
            Some(l) if l.hidden => LineState::Hidden,
            Some(_) => LineState::Visible,
        }
    }

    pub fn has_line(&self, name: &str) -> bool { self.line(name).is_some() }
    pub fn is_highlighted(&self, name: &str) -> bool { self.line(name).is_some_and(|l| l.highlighted) }

    pub fn markers(&self) -> &[Marker] { &self.markers }
    pub fn has_markers(&self) -> bool { !self.markers.is_empty() }
    pub fn marker(&self, id: &str) -> Option<&Marker> { self.markers.iter().find(|m| m.id == id) }

    /// Draw `series` from the current data. The caller checks absence first;
    /// a second create replaces the existing element.
    pub fn create_line(&mut self, series: &SeriesState) {
        let geometry = series.generator.generate(self.window.points(), &self.scales.scales());
        let element = LineElement {
            name: series.name().to_string(),
            id: line_id(series.name()),
            color: series.color(),
            highlighted: false,
            hidden: false,
            geometry: Tween::fixed(geometry),
        };
        if let Some(existing) = self.lines.iter_mut().find(|l| l.name == element.name) {
            log::warn!("line {} already exists; replacing it", element.id);
            *existing = element;
        } else {
            log::debug!("created line {}", element.id);
            self.lines.push(element);
        }
    }

    /// Erase the path and its markers. Returns whether anything was removed.
    pub fn remove_line(&mut self, name: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.name != name);
        if self.lines.len() == before {
            return false;
        }
        self.markers.retain(|m| m.series != name);
        log::debug!("removed line {}", line_id(name));
        true
    }

    /// Remove every line and marker.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.markers.clear();
    }

    /// Visible -> Hidden: keep the element, stop drawing and refreshing it.
    pub fn hide_line(&mut self, name: &str) -> bool {
        match self.lines.iter_mut().find(|l| l.name == name) {
            Some(line) if !line.hidden => {
                line.hidden = true;
                self.markers.retain(|m| m.series != name);
                true
            }
            _ => false,
        }
    }

    /// Hidden -> Visible, redrawn from the current data.
    pub fn show_line(&mut self, series: &SeriesState) -> bool {
        let geometry = series.generator.generate(self.window.points(), &self.scales.scales());
        match self.lines.iter_mut().find(|l| l.name == series.name()) {
            Some(line) if line.hidden => {
                line.hidden = false;
                line.geometry.jump_to(geometry);
                true
            }
            _ => false,
        }
    }

    pub fn set_highlight(&mut self, name: &str, on: bool) -> bool {
        match self.lines.iter_mut().find(|l| l.name == name) {
            Some(line) => {
                line.highlighted = on;
                true
            }
            None => false,
        }
    }

    /// Store `window`, advance the time domain to its last point, and move
    /// every visible line, every marker, and the x axis to the new layout in
    /// one transition starting at `now_ms`.
    pub fn refresh(&mut self, window: DataWindow, registry: &SeriesRegistry, now_ms: f64) -> RefreshSummary {
        self.window = window;
        let transition = Transition::linear(now_ms, self.transition_ms);

        // New markers enter at the pre-advance layout, then slide with the rest.
        if self.has_markers() {
            self.join_markers(registry);
        }

        let domain = self.scales.advance(&self.window);
        let scales = self.scales.scales();

        let mut lines_updated = 0;
        for line in self.lines.iter_mut().filter(|l| !l.hidden) {
            let Some(series) = registry.find(&line.name).filter(|s| s.visible) else { continue };
            let geometry = series.generator.generate(self.window.points(), &scales);
            line.geometry.animate_to(geometry, transition, now_ms);
            lines_updated += 1;
        }

        for marker in &mut self.markers {
            marker.center.animate_to(scales.project(marker.timestamp, marker.value), transition, now_ms);
        }

        self.x_domain.animate_to((domain.0 as f64, domain.1 as f64), transition, now_ms);

        let summary = RefreshSummary { domain, lines_updated, markers_moved: self.markers.len(), transition };
        log::debug!(
            "refresh: {} points, domain [{}, {}], {} lines, {} markers",
            self.window.len(), domain.0, domain.1, lines_updated, summary.markers_moved
        );
        summary
    }

    /// Bind the current data to each visible series' markers by position:
    /// existing markers take the new datum, missing ones are appended at
    /// `x(timestamp + refresh_interval)`. Surplus markers keep their datum.
    /// Returns how many markers were created.
    pub fn join_markers(&mut self, registry: &SeriesRegistry) -> usize {
        let scales = self.scales.scales();
        let mut created = 0;
        for line in self.lines.iter().filter(|l| !l.hidden) {
            let Some(series) = registry.find(&line.name).filter(|s| s.visible) else { continue };
            let name = series.name();
            let mut existing = self.markers.iter_mut().filter(|m| m.series == name);
            let mut fresh = Vec::new();
            for point in self.window.points() {
                let value = point.value(name);
                match existing.next() {
                    Some(marker) => {
                        marker.timestamp = point.timestamp;
                        marker.value = value;
                    }
                    None => fresh.push(Marker {
                        id: marker_id(name, point.timestamp),
                        series: name.to_string(),
                        color: line.color,
                        timestamp: point.timestamp,
                        value,
                        radius: self.marker_radius,
                        center: Tween::fixed(scales.project(point.timestamp + self.refresh_interval_ms, value)),
                    }),
                }
            }
            created += fresh.len();
            self.markers.extend(fresh);
        }
        log::trace!("joined markers: {created} created, {} total", self.markers.len());
        created
    }

    pub fn clear_markers(&mut self) -> usize {
        let n = self.markers.len();
        self.markers.clear();
        n
    }

    /// Topmost marker whose circle contains the plot-local point `(x, y)`.
    pub fn marker_at(&self, x: f64, y: f64, now_ms: f64) -> Option<&Marker> {
        let (w, h) = (self.plot_width(), self.plot_height());
        if !(0.0..=w).contains(&x) || !(0.0..=h).contains(&y) {
            return None;
        }
        self.markers.iter().rev().find(|m| {
            let (cx, cy) = m.center.value_at(now_ms);
            let r = m.radius as f64;
            (cx - x).powi(2) + (cy - y).powi(2) <= r * r
        })
    }

    pub fn plot_width(&self) -> f64 { self.margins.inner_size(self.width, self.height).0 }
    pub fn plot_height(&self) -> f64 { self.margins.inner_size(self.width, self.height).1 }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.x_domain.is_animating(now_ms)
            || self.lines.iter().any(|l| l.geometry.is_animating(now_ms))
            || self.markers.iter().any(|m| m.center.is_animating(now_ms))
    }

    /// Sample the scene at `now_ms`. Hidden lines are left out.
    pub fn frame(&self, now_ms: f64) -> Frame {
        let (plot_w, plot_h) = (self.plot_width(), self.plot_height());
        let (start, end) = self.x_domain.value_at(now_ms);
        let x = TimeScale::new(start.round() as Millis, end.round() as Millis, plot_w);
        let y = self.scales.scales().y;

        let lines = self
            .lines
            .iter()
            .filter(|l| !l.hidden)
            .map(|l| LineSnapshot {
                id: l.id.clone(),
                name: l.name.clone(),
                color: l.color,
                highlighted: l.highlighted,
                geometry: l.geometry.value_at(now_ms),
            })
            .collect();
        let markers = self
            .markers
            .iter()
            .map(|m| {
                let (cx, cy) = m.center.value_at(now_ms);
                MarkerSnapshot { id: m.id.clone(), color: m.color, cx, cy, r: m.radius }
            })
            .collect();

        Frame {
            width: self.width,
            height: self.height,
            margins: self.margins,
            plot_width: plot_w,
            plot_height: plot_h,
            x_axis: AxisLayout::time(&x, self.x_ticks, plot_h),
            y_axis: AxisLayout::value(&y, self.y_ticks, plot_w),
            lines,
            markers,
            tooltip: None,
        }
    }
}
