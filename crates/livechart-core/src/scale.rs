// File: crates/livechart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales, and the manager that advances the time window.

use crate::data::DataWindow;
use crate::grid;

/// Epoch milliseconds on the time axis.
pub type Millis = i64;
/// Plotted value on the Y axis.
pub type Value = f64;

/// Linear map from a domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearMap {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self { Self { domain, range } }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

/// Horizontal time scale: `[start, end]` millis onto `[0, plot_width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    map: LinearMap,
}

impl TimeScale {
    pub fn new(start: Millis, end: Millis, plot_width: f64) -> Self {
        Self { map: LinearMap::new([start as f64, end as f64], [0.0, plot_width]) }
    }
    #[inline]
    pub fn to_px(&self, t: Millis) -> f64 { self.map.apply(t as f64) }
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 { self.map.invert(px) }
    pub fn domain(&self) -> (Millis, Millis) {
        (self.map.domain[0] as Millis, self.map.domain[1] as Millis)
    }
    pub fn width(&self) -> f64 { self.map.range[1] - self.map.range[0] }
    pub fn set_domain(&mut self, start: Millis, end: Millis) {
        self.map.domain = [start as f64, end as f64];
    }
    pub fn ticks(&self, count: usize) -> Vec<Millis> {
        let [a, b] = self.map.domain;
        grid::time_ticks(a, b, count).into_iter().map(|t| t as Millis).collect()
    }
}

/// Vertical value scale: `[vmin, vmax]` onto `[plot_height, 0]` (up is larger).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    map: LinearMap,
}

impl ValueScale {
    pub fn new_linear(vmin: Value, vmax: Value, plot_height: f64) -> Self {
        Self { map: LinearMap::new([vmin, vmax], [plot_height, 0.0]) }
    }
    /// Round the domain outward to a tidy step, as done once at construction.
    pub fn nice(mut self, count: usize) -> Self {
        let (lo, hi) = grid::nice(self.map.domain[0], self.map.domain[1], count);
        self.map.domain = [lo, hi];
        self
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f64 { self.map.apply(v) }
    #[inline]
    pub fn from_px(&self, py: f64) -> Value { self.map.invert(py) }
    pub fn domain(&self) -> (Value, Value) { (self.map.domain[0], self.map.domain[1]) }
    pub fn height(&self) -> f64 { self.map.range[0] - self.map.range[1] }
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::linear_ticks(self.map.domain[0], self.map.domain[1], count)
    }
}

/// The scale pair handed to generators and layouts at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportScales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl ViewportScales {
    #[inline]
    pub fn project(&self, t: Millis, v: Value) -> (f64, f64) { (self.x.to_px(t), self.y.to_px(v)) }
}

/// Owns the chart's single scale pair and moves the time window forward.
#[derive(Clone, Debug)]
pub struct ScaleManager {
    scales: ViewportScales,
    session_start: Millis,
    window_ms: Millis,
}

impl ScaleManager {
    /// The y-domain is niced here and never recomputed; values outside it clip.
    pub fn new(plot_width: f64, plot_height: f64, y_domain: [Value; 2], session_start: Millis, window_ms: Millis) -> Self {
        let y = ValueScale::new_linear(y_domain[0], y_domain[1], plot_height).nice(10);
        let x = TimeScale::new(session_start - window_ms, session_start, plot_width);
        Self { scales: ViewportScales { x, y }, session_start, window_ms }
    }

    /// Timestamp of the window's last point, or the session start when empty.
    pub fn compute_domain_end(&self, window: &DataWindow) -> Millis {
        window.last_timestamp().unwrap_or(self.session_start)
    }

    /// Set the x-domain to `[end_time - window_duration, end_time]`.
    pub fn update_domain(&mut self, end_time: Millis, window_duration: Millis) {
        self.scales.x.set_domain(end_time - window_duration, end_time);
    }

    /// Advance the x-domain to end at the window's latest point.
    pub fn advance(&mut self, window: &DataWindow) -> (Millis, Millis) {
        let end = self.compute_domain_end(window);
        self.update_domain(end, self.window_ms);
        self.scales.x.domain()
    }

    pub fn scales(&self) -> ViewportScales { self.scales }
    pub fn session_start(&self) -> Millis { self.session_start }
    pub fn window_ms(&self) -> Millis { self.window_ms }
}
