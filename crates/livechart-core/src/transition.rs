// File: crates/livechart-core/src/transition.rs
// Summary: Time-based tweens sampled on the rendering clock.

use crate::geometry::PathGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
        }
    }
}

/// Timing shared by every tween issued in one update, so they move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn linear(start_ms: f64, duration_ms: f64) -> Self {
        Self { start_ms, duration_ms, easing: Easing::Linear }
    }

    /// Eased progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let raw = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.easing.apply(raw)
    }

    pub fn end_ms(&self) -> f64 { self.start_ms + self.duration_ms }
    pub fn is_done(&self, now_ms: f64) -> bool { now_ms >= self.end_ms() }
}

/// Values that can be blended between two states.
pub trait Lerp: Clone {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self { from + (to - from) * t }
}

impl Lerp for (f64, f64) {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self { (f64::lerp(&from.0, &to.0, t), f64::lerp(&from.1, &to.1, t)) }
}

impl Lerp for PathGeometry {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self { PathGeometry::interpolate(from, to, t) }
}

/// An animated attribute. Retargeting mid-flight starts from wherever the
/// attribute currently is, so the newest update wins.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    transition: Option<Transition>,
}

impl<T: Lerp> Tween<T> {
    /// Settled at `value`, no animation.
    pub fn fixed(value: T) -> Self {
        Self { from: value.clone(), to: value, transition: None }
    }

    pub fn value_at(&self, now_ms: f64) -> T {
        match &self.transition {
            Some(tr) if !tr.is_done(now_ms) => T::lerp(&self.from, &self.to, tr.progress(now_ms)),
            _ => self.to.clone(),
        }
    }

    /// Value once any running transition has finished.
    pub fn target(&self) -> &T { &self.to }

    pub fn animate_to(&mut self, to: T, transition: Transition, now_ms: f64) {
        self.from = self.value_at(now_ms);
        self.to = to;
        self.transition = Some(transition);
    }

    pub fn jump_to(&mut self, to: T) {
        *self = Self::fixed(to);
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.transition.is_some_and(|tr| !tr.is_done(now_ms))
    }
}
