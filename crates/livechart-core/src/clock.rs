// File: crates/livechart-core/src/clock.rs
// Summary: Rendering clock used to start and sample transitions.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic milliseconds. Only differences matter.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Instant`, zeroed at construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 { self.origin.elapsed().as_secs_f64() * 1000.0 }
}

/// Hand-driven clock. Clones share the same time, so a test can keep a
/// handle while the chart owns another.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self { Self { now: Rc::new(Cell::new(start_ms)) } }
    pub fn set(&self, ms: f64) { self.now.set(ms); }
    pub fn advance(&self, ms: f64) { self.now.set(self.now.get() + ms); }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 { self.now.get() }
}
