// File: crates/livechart-core/src/config.rs
// Summary: Construction-time chart configuration (sizes, window, timings, y-domain).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{Insets, HEIGHT, TRANSITION_MS, WIDTH, WINDOW_MS};

/// Everything a chart instance needs at construction.
///
/// Missing JSON fields fall back to [`ChartConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Pixel width of the host container.
    pub width: i32,
    pub height: i32,
    pub margins: Insets,
    /// Length of the rolling time window, in milliseconds.
    pub window_ms: i64,
    /// Domain end used while no data has arrived. `None` means "now".
    pub session_start_ms: Option<i64>,
    /// Initial value domain; niced once at construction.
    pub y_domain: [f64; 2],
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub transition_ms: f64,
    /// Offset applied to hover markers when they are first placed.
    pub refresh_interval_ms: i64,
    pub marker_radius: f32,
    pub tooltip_offset_y: f32,
    pub tooltip_opacity: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Insets::default(),
            window_ms: WINDOW_MS,
            session_start_ms: None,
            y_domain: [0.0, 100.0],
            x_ticks: 5,
            y_ticks: 5,
            transition_ms: TRANSITION_MS,
            refresh_interval_ms: 0,
            marker_radius: 3.0,
            tooltip_offset_y: 28.0,
            tooltip_opacity: 0.9,
        }
    }
}

impl ChartConfig {
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn with_session_start(mut self, ms: i64) -> Self {
        self.session_start_ms = Some(ms);
        self
    }

    pub fn with_refresh_interval(mut self, ms: i64) -> Self {
        self.refresh_interval_ms = ms;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Width of the drawable plot area (host width minus margins).
    pub fn plot_width(&self) -> f64 { self.margins.inner_size(self.width, self.height).0 }

    /// Height of the drawable plot area (fixed height minus margins).
    pub fn plot_height(&self) -> f64 { self.margins.inner_size(self.width, self.height).1 }

    pub fn validate(&self) -> Result<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::Config(format!(
                "margins {:?} leave no plot area in {}x{}",
                self.margins, self.width, self.height
            )));
        }
        if self.window_ms <= 0 {
            return Err(ChartError::Config(format!("window_ms must be positive, got {}", self.window_ms)));
        }
        if !(self.transition_ms > 0.0) {
            return Err(ChartError::Config(format!("transition_ms must be positive, got {}", self.transition_ms)));
        }
        let [lo, hi] = self.y_domain;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ChartError::Config(format!("y_domain must be finite and increasing, got [{lo}, {hi}]")));
        }
        Ok(())
    }
}
