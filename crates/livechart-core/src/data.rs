// File: crates/livechart-core/src/data.rs
// Summary: Data feed model: points, the rolling window, and property specs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One sample of every tracked property at `timestamp` (epoch millis).
///
/// Serialized flat: `{"timestamp": 1000, "temp": 20.0, "humidity": 40.0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: i64,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl DataPoint {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp, values: BTreeMap::new() }
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Value of `name`, or NaN when the producer left it out.
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(f64::NAN)
    }
}

/// Ordered snapshot of known points.
/// Contract: timestamps are non-decreasing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataWindow {
    points: Vec<DataPoint>,
}

impl DataWindow {
    pub fn new() -> Self { Self::default() }

    /// Wrap a producer snapshot. Ordering is the producer's job and is
    /// only checked in debug builds.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "data points must be ordered by timestamp"
        );
        Self { points }
    }

    /// Append a point. A point older than the current tail is dropped so the
    /// window stays ordered; returns whether it was kept.
    pub fn push(&mut self, point: DataPoint) -> bool {
        if let Some(last) = self.points.last() {
            if point.timestamp < last.timestamp {
                log::warn!("dropping out-of-order point at {} (tail is {})", point.timestamp, last.timestamp);
                return false;
            }
        }
        self.points.push(point);
        true
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn last_timestamp(&self) -> Option<i64> { self.points.last().map(|p| p.timestamp) }

    /// Points inside `[end - duration, end]`.
    pub fn visible(&self, end: i64, duration: i64) -> &[DataPoint] {
        let start = end - duration;
        let lo = self.points.partition_point(|p| p.timestamp < start);
        let hi = self.points.partition_point(|p| p.timestamp <= end);
        &self.points[lo..hi.max(lo)]
    }

    /// Drop every point older than `ts`; returns how many were removed.
    pub fn prune_before(&mut self, ts: i64) -> usize {
        let cut = self.points.partition_point(|p| p.timestamp < ts);
        self.points.drain(..cut);
        cut
    }
}

impl From<Vec<DataPoint>> for DataWindow {
    fn from(points: Vec<DataPoint>) -> Self { Self::from_points(points) }
}

/// One renderable series, identified by the property it plots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}
