// File: crates/livechart-core/src/lib.rs
// Summary: Core library entry point; exports the live chart engine and its parts.

pub mod axis;
pub mod chart;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod raster;
pub mod renderer;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod transition;
pub mod types;

pub use axis::{AxisLayout, Orient, Tick};
pub use chart::LiveChart;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ChartConfig;
pub use data::{DataPoint, DataWindow, PropertySpec};
pub use error::{ChartError, Result};
pub use frame::Frame;
pub use geometry::{PathCommand, PathGeometry};
pub use interaction::{InteractionController, PointerEvent, ToggleEvent, VisibilityControls};
pub use raster::RenderOptions;
pub use renderer::{ChartRenderer, LineState, RefreshSummary};
pub use scale::{ScaleManager, TimeScale, ValueScale, ViewportScales};
pub use series::{LineGenerator, SeriesRegistry, SeriesState};
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipManager};
pub use transition::{Easing, Transition, Tween};
