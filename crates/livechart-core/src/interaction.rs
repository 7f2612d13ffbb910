// File: crates/livechart-core/src/interaction.rs
// Summary: Host-facing toggle/highlight/hover operations routed to the registry and renderer.

use std::collections::BTreeMap;

use crate::renderer::{ChartRenderer, LineState};
use crate::series::SeriesRegistry;
use crate::tooltip::TooltipManager;
use crate::types::Insets;

/// A visibility control changed; `checked` is its new state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEvent {
    pub checked: bool,
}

impl ToggleEvent {
    pub const ON: Self = Self { checked: true };
    pub const OFF: Self = Self { checked: false };
}

/// Pointer input from the host, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    EnterChart,
    LeaveChart,
    /// Pointer moved; hit-tests markers and drives over/out.
    Move { page_x: f64, page_y: f64 },
    MarkerOver { id: String, page_x: f64, page_y: f64 },
    MarkerOut,
}

/// Checked state of the host's per-series visibility checkboxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityControls {
    checked: BTreeMap<String, bool>,
}

impl VisibilityControls {
    /// One checked control per name.
    pub fn reset<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.checked = names.into_iter().map(|n| (n.to_string(), true)).collect();
    }
    pub fn set(&mut self, name: &str, checked: bool) { self.checked.insert(name.to_string(), checked); }
    pub fn set_all(&mut self, checked: bool) { self.checked.values_mut().for_each(|c| *c = checked); }
    pub fn is_checked(&self, name: &str) -> Option<bool> { self.checked.get(name).copied() }
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ { self.checked.iter().map(|(k, v)| (k.as_str(), *v)) }
}

/// Borrowed view over one chart's parts for a single host command.
///
/// Every operation applies fully before returning and silently ignores
/// names the chart does not know.
pub struct InteractionController<'a> {
    pub(crate) registry: &'a mut SeriesRegistry,
    pub(crate) renderer: &'a mut ChartRenderer,
    pub(crate) tooltip: &'a mut TooltipManager,
    pub(crate) controls: &'a mut VisibilityControls,
    pub(crate) margins: Insets,
    pub(crate) has_data: bool,
    pub(crate) now_ms: f64,
}

impl InteractionController<'_> {
    /// Emphasize (or stop emphasizing) the line for `name` if it exists.
    pub fn highlight_line(&mut self, name: &str, on: bool) {
        if !self.renderer.set_highlight(name, on) {
            log::trace!("highlight ignored: no line {name}");
        }
    }

    /// Bring the line for `name` in line with the control's new state.
    pub fn toggle_line(&mut self, event: &ToggleEvent, name: &str) {
        let Some(series) = self.registry.find(name).cloned() else {
            log::trace!("toggle ignored: unknown series {name}");
            return;
        };
        self.controls.set(name, event.checked);
        let state = self.renderer.line_state(name);
        if event.checked {
            self.registry.set_visible(name, true);
            match state {
                LineState::Absent => self.renderer.create_line(&series),
                LineState::Hidden => {
                    self.renderer.show_line(&series);
                }
                LineState::Visible => {}
            }
        } else {
            self.registry.set_visible(name, false);
            if state != LineState::Absent {
                self.renderer.remove_line(name);
                self.drop_stale_tooltip();
            }
        }
    }

    /// Apply `toggle_line` to every series in order, then set every control.
    /// Does nothing before the first data snapshot has arrived.
    pub fn toggle_all_lines(&mut self, event: &ToggleEvent) {
        if !self.has_data {
            log::trace!("toggle all ignored: no data yet");
            return;
        }
        let names: Vec<String> = self.registry.properties().map(|p| p.name.clone()).collect();
        for name in &names {
            self.toggle_line(event, name);
        }
        self.controls.set_all(event.checked);
    }

    /// Visible -> Hidden without dropping the element.
    pub fn hide_line(&mut self, name: &str) {
        if self.renderer.hide_line(name) {
            self.registry.set_visible(name, false);
            self.drop_stale_tooltip();
        }
    }

    /// Hidden -> Visible, redrawn from current data.
    pub fn show_line(&mut self, name: &str) {
        let Some(series) = self.registry.find(name).cloned() else { return };
        if self.renderer.show_line(&series) {
            self.registry.set_visible(name, true);
        }
    }

    pub fn pointer(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::EnterChart => {
                self.tooltip.on_chart_enter(self.renderer, self.registry);
            }
            PointerEvent::LeaveChart => {
                self.tooltip.on_chart_leave(self.renderer);
            }
            PointerEvent::MarkerOver { id, page_x, page_y } => {
                self.tooltip.on_marker_over(self.renderer, id, *page_x, *page_y);
            }
            PointerEvent::MarkerOut => self.tooltip.on_marker_out(),
            PointerEvent::Move { page_x, page_y } => {
                let x = page_x - self.margins.left as f64;
                let y = page_y - self.margins.top as f64;
                let hit = self.renderer.marker_at(x, y, self.now_ms).map(|m| m.id.clone());
                if hit.as_deref() == self.tooltip.hovered() {
                    return;
                }
                self.tooltip.on_marker_out();
                if let Some(id) = hit {
                    self.tooltip.on_marker_over(self.renderer, &id, *page_x, *page_y);
                }
            }
        }
    }

    fn drop_stale_tooltip(&mut self) {
        if let Some(id) = self.tooltip.hovered() {
            if self.renderer.marker(id).is_none() {
                self.tooltip.on_marker_out();
            }
        }
    }
}
