// File: crates/livechart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, ids).

/// Default host container width in pixels.
pub const WIDTH: i32 = 1024;
/// Chart height in pixels; fixed by the host layout.
pub const HEIGHT: i32 = 500;
/// Default rolling window, in milliseconds.
pub const WINDOW_MS: i64 = 60_000;
/// Duration of every refresh transition, in milliseconds.
pub const TRANSITION_MS: f64 = 750.0;

/// Margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right). Widened so it cannot overflow.
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }

    /// Plot area left inside a `width` x `height` box; negative when the
    /// margins do not fit.
    pub fn inner_size(&self, width: i32, height: i32) -> (f64, f64) {
        let w = i64::from(width) - self.hsum() as i64;
        let h = i64::from(height) - self.vsum() as i64;
        (w as f64, h as f64)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(25, 15, 10, 20)
    }
}

/// Element id of the path drawn for `name`.
pub fn line_id(name: &str) -> String { format!("{name}_line") }

/// Element id of the marker drawn for `name` at `timestamp`.
pub fn marker_id(name: &str, timestamp: i64) -> String { format!("{name}_circle_{timestamp}") }
