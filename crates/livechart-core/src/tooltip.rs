// File: crates/livechart-core/src/tooltip.rs
// Summary: Hover markers lifecycle and the single floating value label.

use crate::axis::format_value;
use crate::config::ChartConfig;
use crate::renderer::ChartRenderer;
use crate::series::SeriesRegistry;

/// The floating label. It is never removed, only faded to zero opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Page coordinates of the label's top-left corner.
    pub left: f64,
    pub top: f64,
    pub opacity: f32,
}

impl Tooltip {
    pub fn is_visible(&self) -> bool { self.opacity > 0.0 }
}

impl Default for Tooltip {
    fn default() -> Self { Self { text: String::new(), left: 0.0, top: 0.0, opacity: 0.0 } }
}

pub struct TooltipManager {
    tooltip: Tooltip,
    offset_y: f64,
    opacity: f32,
    hovered: Option<String>,
}

impl TooltipManager {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            tooltip: Tooltip::default(),
            offset_y: config.tooltip_offset_y as f64,
            opacity: config.tooltip_opacity,
            hovered: None,
        }
    }

    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }

    /// Id of the marker under the pointer, if any.
    pub fn hovered(&self) -> Option<&str> { self.hovered.as_deref() }

    /// Pointer entered the chart: place one marker per point of every
    /// visible series. Returns how many markers were created.
    pub fn on_chart_enter(&mut self, renderer: &mut ChartRenderer, registry: &SeriesRegistry) -> usize {
        let created = renderer.join_markers(registry);
        log::trace!("chart enter: {created} markers");
        created
    }

    /// Pointer is over marker `id`: show its value near the pointer.
    /// Unknown ids are ignored.
    pub fn on_marker_over(&mut self, renderer: &ChartRenderer, id: &str, page_x: f64, page_y: f64) -> bool {
        let Some(marker) = renderer.marker(id) else { return false };
        self.tooltip = Tooltip {
            text: format_value(marker.value),
            left: page_x,
            top: page_y - self.offset_y,
            opacity: self.opacity,
        };
        self.hovered = Some(marker.id.clone());
        true
    }

    /// Pointer left a marker: fade the label out, keep the element.
    pub fn on_marker_out(&mut self) {
        self.tooltip.opacity = 0.0;
        self.hovered = None;
    }

    /// Pointer left the chart: drop every marker so the next entry starts
    /// from the current data. The label goes with the marker it described.
    pub fn on_chart_leave(&mut self, renderer: &mut ChartRenderer) -> usize {
        self.on_marker_out();
        let removed = renderer.clear_markers();
        log::trace!("chart leave: {removed} markers removed");
        removed
    }
}
