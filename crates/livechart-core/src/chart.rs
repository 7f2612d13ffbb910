// File: crates/livechart-core/src/chart.rs
// Summary: LiveChart: one chart instance wiring data/property feeds, interaction, and output.

use std::path::Path;

use crate::clock::{Clock, SystemClock};
use crate::config::ChartConfig;
use crate::data::{DataWindow, PropertySpec};
use crate::error::Result;
use crate::frame::Frame;
use crate::interaction::{InteractionController, PointerEvent, ToggleEvent, VisibilityControls};
use crate::raster::RenderOptions;
use crate::renderer::{ChartRenderer, RefreshSummary};
use crate::scale::Millis;
use crate::series::SeriesRegistry;
use crate::tooltip::TooltipManager;

/// A single scrolling multi-series chart.
///
/// The host feeds it through [`LiveChart::on_properties_changed`] and
/// [`LiveChart::on_data_changed`], and forwards UI commands through
/// [`LiveChart::interaction`]. All calls are synchronous; animation
/// progresses on the injected clock and is observed by sampling frames.
pub struct LiveChart {
    id: String,
    config: ChartConfig,
    registry: SeriesRegistry,
    renderer: ChartRenderer,
    tooltip: TooltipManager,
    controls: VisibilityControls,
    properties: Vec<PropertySpec>,
    has_data: bool,
    clock: Box<dyn Clock>,
}

impl LiveChart {
    /// Chart on the system clock. `id` names the svg and clip elements.
    pub fn new(id: impl Into<String>, config: ChartConfig) -> Result<Self> {
        Self::with_clock(id, config, Box::new(SystemClock::new()))
    }

    pub fn with_clock(id: impl Into<String>, config: ChartConfig, clock: Box<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let session_start = config
            .session_start_ms
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        let renderer = ChartRenderer::new(&config, session_start);
        let tooltip = TooltipManager::new(&config);
        let id = id.into();
        log::info!(
            "chart {id}: {}x{} plot, {} ms window, session start {session_start}",
            config.plot_width(), config.plot_height(), config.window_ms
        );
        Ok(Self {
            id,
            config,
            registry: SeriesRegistry::new(),
            renderer,
            tooltip,
            controls: VisibilityControls::default(),
            properties: Vec::new(),
            has_data: false,
            clock,
        })
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn registry(&self) -> &SeriesRegistry { &self.registry }
    pub fn renderer(&self) -> &ChartRenderer { &self.renderer }
    pub fn controls(&self) -> &VisibilityControls { &self.controls }
    pub fn tooltip(&self) -> &crate::tooltip::Tooltip { self.tooltip.tooltip() }
    pub fn session_start(&self) -> Millis { self.renderer.scale_manager().session_start() }
    pub fn x_domain(&self) -> (Millis, Millis) { self.renderer.x_domain() }
    pub fn now_ms(&self) -> f64 { self.clock.now_ms() }

    /// Property list changed: rebuild generators and recreate every line.
    /// An identical list is ignored; returns whether anything was rebuilt.
    pub fn on_properties_changed(&mut self, properties: &[PropertySpec]) -> bool {
        if !self.properties.is_empty() && self.properties == properties {
            return false;
        }
        self.properties = properties.to_vec();
        self.renderer.clear();
        self.tooltip.on_marker_out();
        self.registry.rebuild_generators(properties);
        self.controls.reset(properties.iter().map(|p| p.name.as_str()));
        for series in self.registry.states() {
            self.renderer.create_line(series);
        }
        true
    }

    /// New data snapshot: refresh unless it equals the current one.
    pub fn on_data_changed(&mut self, window: DataWindow) -> Option<RefreshSummary> {
        if self.has_data && *self.renderer.window() == window {
            return None;
        }
        self.has_data = true;
        let now = self.clock.now_ms();
        Some(self.renderer.refresh(window, &self.registry, now))
    }

    /// Host command surface for one call.
    pub fn interaction(&mut self) -> InteractionController<'_> {
        InteractionController {
            registry: &mut self.registry,
            renderer: &mut self.renderer,
            tooltip: &mut self.tooltip,
            controls: &mut self.controls,
            margins: self.config.margins,
            has_data: self.has_data,
            now_ms: self.clock.now_ms(),
        }
    }

    pub fn highlight_line(&mut self, name: &str, on: bool) { self.interaction().highlight_line(name, on); }
    pub fn toggle_line(&mut self, event: &ToggleEvent, name: &str) { self.interaction().toggle_line(event, name); }
    pub fn toggle_all_lines(&mut self, event: &ToggleEvent) { self.interaction().toggle_all_lines(event); }
    pub fn pointer(&mut self, event: &PointerEvent) { self.interaction().pointer(event); }

    pub fn is_animating(&self) -> bool { self.renderer.is_animating(self.clock.now_ms()) }

    /// Scene at the clock's current instant.
    pub fn frame(&self) -> Frame { self.frame_at(self.clock.now_ms()) }

    pub fn frame_at(&self, now_ms: f64) -> Frame {
        let mut frame = self.renderer.frame(now_ms);
        frame.tooltip = Some(self.tooltip.tooltip().clone());
        frame
    }

    /// Scene with every running transition finished.
    pub fn settled_frame(&self) -> Frame { self.frame_at(f64::INFINITY) }

    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        self.frame().render_to_png(opts, path)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.frame().render_to_png_bytes(opts)
    }

    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        self.frame().render_to_svg(&self.id, path)
    }
}
