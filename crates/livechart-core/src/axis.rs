// File: crates/livechart-core/src/axis.rs
// Summary: Axis tick layouts regenerated from the live scales.

use chrono::DateTime;

use crate::scale::{Millis, TimeScale, ValueScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// One tick: its pixel offset along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Laid-out axis. `tick_size` is negative so ticks run across the plot as grid lines.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub orient: Orient,
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    /// Label offset away from the axis line, in pixels.
    pub label_offset: f64,
}

impl AxisLayout {
    /// Time axis along the bottom edge, labelled `HH:MM:SS` (UTC).
    pub fn time(scale: &TimeScale, count: usize, plot_height: f64) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|t| Tick { offset: scale.to_px(t), label: format_time(t) })
            .collect();
        Self { orient: Orient::Bottom, ticks, tick_size: -plot_height, label_offset: 10.0 }
    }

    /// Value axis along the left edge.
    pub fn value(scale: &ValueScale, count: usize, plot_width: f64) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: format_value(v) })
            .collect();
        Self { orient: Orient::Left, ticks, tick_size: -plot_width, label_offset: 3.0 }
    }
}

pub fn format_time(ms: Millis) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

/// Shortest decimal that round-trips; integers print without a fraction.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 { format!("{}", v as i64) } else { format!("{v}") }
}
