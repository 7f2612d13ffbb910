// File: crates/livechart-core/tests/geometry.rs
// Purpose: Monotone line shape, path tweening, and SVG path data.

use livechart_core::{PathCommand, PathGeometry};

#[test]
fn small_inputs() {
    assert!(PathGeometry::monotone_x(&[]).is_empty());
    assert_eq!(PathGeometry::monotone_x(&[(1.0, 2.0)]).commands, vec![PathCommand::MoveTo((1.0, 2.0))]);
    let two = PathGeometry::monotone_x(&[(0.0, 470.0), (100.0, 400.0)]);
    assert_eq!(two.commands, vec![PathCommand::MoveTo((0.0, 470.0)), PathCommand::LineTo((100.0, 400.0))]);
    assert_eq!(two.to_svg_d(), "M0,470L100,400");
}

#[test]
fn passes_through_every_point() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 5.0), (4.0, 2.0)];
    let g = PathGeometry::monotone_x(&pts);
    assert_eq!(g.vertices(), pts.to_vec());
    assert_eq!(g.coord_count(), 2 + 4 * 6);
}

#[test]
fn no_overshoot_between_samples() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 5.0), (4.0, 2.0), (6.0, 2.5)];
    let g = PathGeometry::monotone_x(&pts);
    let mut prev = pts[0];
    for cmd in &g.commands[1..] {
        let PathCommand::CubicTo(c1, c2, end) = *cmd else { panic!("expected cubic segments") };
        let (lo, hi) = (prev.1.min(end.1), prev.1.max(end.1));
        for c in [c1, c2] {
            assert!(c.1 >= lo - 1e-9 && c.1 <= hi + 1e-9, "control {c:?} leaves [{lo}, {hi}]");
            assert!(c.0 > prev.0 && c.0 < end.0);
        }
        prev = end;
    }
}

#[test]
fn flat_run_stays_flat() {
    let g = PathGeometry::monotone_x(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]);
    let PathCommand::CubicTo(c1, c2, _) = g.commands[2] else { panic!("expected cubic") };
    assert_eq!((c1.1, c2.1), (1.0, 1.0));
}

#[test]
fn interpolate_pairs_coordinates() {
    let a = PathGeometry::monotone_x(&[(0.0, 0.0), (10.0, 10.0)]);
    let b = PathGeometry::monotone_x(&[(10.0, 20.0), (30.0, 40.0)]);
    let mid = PathGeometry::interpolate(&a, &b, 0.5);
    assert_eq!(mid.vertices(), vec![(5.0, 10.0), (20.0, 25.0)]);
    assert_eq!(PathGeometry::interpolate(&a, &b, 0.0), a);
    assert_eq!(PathGeometry::interpolate(&a, &b, 1.0), b);
}

#[test]
fn interpolate_into_longer_path_uses_target_for_surplus() {
    let a = PathGeometry::monotone_x(&[(0.0, 0.0)]);
    let b = PathGeometry::monotone_x(&[(10.0, 10.0), (20.0, 20.0)]);
    let mid = PathGeometry::interpolate(&a, &b, 0.5);
    assert_eq!(mid.commands, vec![PathCommand::MoveTo((5.0, 5.0)), PathCommand::LineTo((20.0, 20.0))]);
    assert!(PathGeometry::interpolate(&b, &PathGeometry::empty(), 0.5).is_empty());
}

#[test]
fn nan_values_survive_as_artifacts() {
    let g = PathGeometry::monotone_x(&[(0.0, f64::NAN), (1.0, 2.0)]);
    assert!(!g.is_finite());
    assert_eq!(g.to_svg_d(), "M0,NaNL1,2");
}
