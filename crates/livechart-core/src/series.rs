// File: crates/livechart-core/src/series.rs
// Summary: Series registry: per-property line generators, palette slots, and visibility.

use skia_safe as skia;

use crate::data::{DataPoint, PropertySpec};
use crate::geometry::{PathGeometry, Point};
use crate::scale::ViewportScales;
use crate::theme::palette_color;

/// Turns a point sequence into a smoothed path for one property.
///
/// Scales are passed in on every call, so a generator never holds on to
/// a stale mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineGenerator {
    property: String,
}

impl LineGenerator {
    pub fn new(property: impl Into<String>) -> Self { Self { property: property.into() } }

    pub fn property(&self) -> &str { &self.property }

    /// Pixel position of every point; missing values become NaN.
    pub fn project(&self, points: &[DataPoint], scales: &ViewportScales) -> Vec<Point> {
        points.iter().map(|p| scales.project(p.timestamp, p.value(&self.property))).collect()
    }

    pub fn generate(&self, points: &[DataPoint], scales: &ViewportScales) -> PathGeometry {
        PathGeometry::monotone_x(&self.project(points, scales))
    }
}

/// Derived state for one property.
#[derive(Clone, Debug)]
pub struct SeriesState {
    pub property: PropertySpec,
    pub generator: LineGenerator,
    pub color_index: usize,
    pub visible: bool,
}

impl SeriesState {
    pub fn name(&self) -> &str { &self.property.name }
    pub fn color(&self) -> skia::Color { palette_color(self.color_index) }
}

/// Ordered series definitions. Positions decide colors, so reordering the
/// properties reorders the palette.
#[derive(Clone, Debug, Default)]
pub struct SeriesRegistry {
    states: Vec<SeriesState>,
}

impl SeriesRegistry {
    pub fn new() -> Self { Self::default() }

    /// Replace every generator with one per property, all visible.
    /// Duplicate names are kept as-is; lookups by name resolve to the first.
    pub fn rebuild_generators(&mut self, properties: &[PropertySpec]) {
        self.states = properties
            .iter()
            .enumerate()
            .map(|(index, property)| SeriesState {
                generator: LineGenerator::new(property.name.clone()),
                property: property.clone(),
                color_index: index,
                visible: true,
            })
            .collect();
        log::info!("rebuilt {} line generators", self.states.len());
    }

    pub fn color_for(&self, index: usize) -> skia::Color { palette_color(index) }

    pub fn states(&self) -> &[SeriesState] { &self.states }
    pub fn len(&self) -> usize { self.states.len() }
    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    pub fn properties(&self) -> impl Iterator<Item = &PropertySpec> + '_ {
        self.states.iter().map(|s| &s.property)
    }

    pub fn find(&self, name: &str) -> Option<&SeriesState> { self.states.iter().find(|s| s.name() == name) }

    pub fn position(&self, name: &str) -> Option<usize> { self.states.iter().position(|s| s.name() == name) }

    pub fn is_visible(&self, name: &str) -> bool { self.find(name).is_some_and(|s| s.visible) }

    /// Flip the visibility flag; `false` when the name is unknown.
    pub(crate) fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.states.iter_mut().find(|s| s.property.name == name) {
            Some(s) => {
                s.visible = visible;
                true
            }
            None => false,
        }
    }
}
