// File: crates/livechart-core/src/grid.rs
// Summary: Tick layout helpers: 1/2/5 linear steps, domain nicing, time intervals.

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Calendar-free time intervals the x axis may step by.
const TIME_STEPS: [f64; 15] = [
    SECOND,
    5.0 * SECOND,
    15.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    5.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    7.0 * DAY,
];

/// Step from the 1/2/5 x 10^k family that yields roughly `count` ticks over `[lo, hi]`.
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = (hi - lo).abs();
    if !(span > 0.0) || !span.is_finite() || count == 0 {
        return 0.0;
    }
    let m = count as f64;
    let mut step = 10f64.powi((span / m).log10().floor() as i32);
    let err = m / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    step
}

/// Multiples of `step` inside `[lo, hi]`.
pub fn ticks_with_step(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if last < first {
        return Vec::new();
    }
    (0..=((last - first) as usize)).map(|i| (first + i as f64) * step).collect()
}

/// Round tick values for a linear domain.
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    ticks_with_step(a, b, tick_step(a, b, count))
}

/// Extend `[lo, hi]` outward to multiples of a round step.
pub fn nice(lo: f64, hi: f64, count: usize) -> (f64, f64) {
    let step = tick_step(lo, hi, count);
    if step == 0.0 {
        return (lo, hi);
    }
    ((lo / step).floor() * step, (hi / step).ceil() * step)
}

/// Interval (ms) for roughly `count` ticks over a time span. Below one
/// second this falls back to 1/2/5 millisecond steps; above the longest
/// fixed interval it steps in whole days.
pub fn time_step(lo_ms: f64, hi_ms: f64, count: usize) -> f64 {
    let span = (hi_ms - lo_ms).abs();
    if count == 0 || !(span > 0.0) {
        return 0.0;
    }
    let target = span / count as f64;
    let i = TIME_STEPS.partition_point(|&d| d <= target);
    if i == 0 {
        return tick_step(lo_ms, hi_ms, count).max(1.0);
    }
    if i == TIME_STEPS.len() {
        return tick_step(lo_ms / DAY, hi_ms / DAY, count).max(1.0) * DAY;
    }
    let (below, above) = (TIME_STEPS[i - 1], TIME_STEPS[i]);
    if target / below < above / target { below } else { above }
}

/// Interval-aligned timestamps inside `[lo_ms, hi_ms]`.
pub fn time_ticks(lo_ms: f64, hi_ms: f64, count: usize) -> Vec<f64> {
    let (a, b) = if lo_ms <= hi_ms { (lo_ms, hi_ms) } else { (hi_ms, lo_ms) };
    ticks_with_step(a, b, time_step(a, b, count))
}
