// File: crates/livechart-core/src/geometry.rs
// Summary: Path geometry in plot pixels: monotone-X smoothing, tweening, SVG path data.

use std::fmt::Write as _;

/// Point in plot-local pixels.
pub type Point = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bezier: two control points, then the end point.
    CubicTo(Point, Point, Point),
}

impl PathCommand {
    fn coords(&self) -> usize {
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => 2,
            PathCommand::CubicTo(..) => 6,
        }
    }

    fn push_numbers(&self, out: &mut Vec<f64>) {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.extend([p.0, p.1]),
            PathCommand::CubicTo(a, b, c) => out.extend([a.0, a.1, b.0, b.1, c.0, c.1]),
        }
    }
}

/// Renderable description of one line. An empty geometry draws nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
}

impl PathGeometry {
    pub fn empty() -> Self { Self::default() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Vertices the path passes through (control points excluded).
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CubicTo(_, _, p) => p,
            })
            .collect()
    }

    pub fn is_finite(&self) -> bool { self.numbers().iter().all(|v| v.is_finite()) }

    /// Every coordinate in command order.
    pub fn numbers(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.commands.len() * 6);
        for c in &self.commands {
            c.push_numbers(&mut out);
        }
        out
    }

    /// Smooth line through `points` that preserves monotonicity between
    /// samples (no overshoot). Points are expected ordered by x.
    pub fn monotone_x(points: &[Point]) -> Self {
        let mut commands = Vec::with_capacity(points.len());
        match points {
            [] => {}
            [p] => commands.push(PathCommand::MoveTo(*p)),
            [a, b] => {
                commands.push(PathCommand::MoveTo(*a));
                commands.push(PathCommand::LineTo(*b));
            }
            _ => {
                commands.push(PathCommand::MoveTo(points[0]));
                let mut t0 = 0.0;
                for i in 2..points.len() {
                    let t1 = slope3(points[i - 2], points[i - 1], points[i]);
                    let start = if i == 2 { slope2(points[0], points[1], t1) } else { t0 };
                    commands.push(hermite(points[i - 2], points[i - 1], start, t1));
                    t0 = t1;
                }
                let n = points.len();
                let end = slope2(points[n - 2], points[n - 1], t0);
                commands.push(hermite(points[n - 2], points[n - 1], t0, end));
            }
        }
        Self { commands }
    }

    /// Tween from `from` to `to` at `t` in `[0, 1]`.
    ///
    /// Coordinates are paired by position: the result takes `to`'s command
    /// structure, and every coordinate that also exists in `from` is
    /// interpolated. Surplus coordinates of `to` appear at their final value.
    pub fn interpolate(from: &PathGeometry, to: &PathGeometry, t: f64) -> PathGeometry {
        if t >= 1.0 {
            return to.clone();
        }
        let a = from.numbers();
        let mut idx = 0usize;
        let mut next = |v: f64| {
            let out = match a.get(idx) {
                Some(&s) => s + (v - s) * t,
                None => v,
            };
            idx += 1;
            out
        };
        let mut lerp = |p: Point| (next(p.0), next(p.1));
        let commands = to
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(lerp(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(lerp(p)),
                PathCommand::CubicTo(p1, p2, p) => {
                    let p1 = lerp(p1);
                    let p2 = lerp(p2);
                    PathCommand::CubicTo(p1, p2, lerp(p))
                }
            })
            .collect();
        PathGeometry { commands }
    }

    /// Number of coordinates in the geometry.
    pub fn coord_count(&self) -> usize { self.commands.iter().map(PathCommand::coords).sum() }

    /// SVG path data, e.g. `M0,470L100,400`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for c in &self.commands {
            let _ = match *c {
                PathCommand::MoveTo((x, y)) => write!(d, "M{},{}", num(x), num(y)),
                PathCommand::LineTo((x, y)) => write!(d, "L{},{}", num(x), num(y)),
                PathCommand::CubicTo((x1, y1), (x2, y2), (x, y)) => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(x1), num(y1), num(x2), num(y2), num(x), num(y)
                ),
            };
        }
        d
    }
}

/// Compact coordinate formatting for path data.
fn num(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".into() } else { format!("{r}") }
}

#[inline]
fn sign(v: f64) -> f64 { if v < 0.0 { -1.0 } else { 1.0 } }

/// Tangent at `p1` from its neighbours (Steffen 1990), zero at local extrema.
fn slope3(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / if h0 != 0.0 { h0 } else if h1 < 0.0 { -0.0 } else { 0.0 };
    let s1 = (p2.1 - p1.1) / if h1 != 0.0 { h1 } else if h0 < 0.0 { -0.0 } else { 0.0 };
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() { 0.0 } else { t }
}

/// One-sided tangent at an end point given the neighbouring tangent `t`.
fn slope2(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 { (3.0 * (p1.1 - p0.1) / h - t) / 2.0 } else { t }
}

/// Cubic Hermite segment `a -> b` with tangents `t0`, `t1`, in Bezier form.
fn hermite(a: Point, b: Point, t0: f64, t1: f64) -> PathCommand {
    let dx = (b.0 - a.0) / 3.0;
    PathCommand::CubicTo((a.0 + dx, a.1 + dx * t0), (b.0 - dx, b.1 - dx * t1), b)
}
