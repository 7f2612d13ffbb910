// File: crates/livechart-core/tests/tooltip.rs
// Purpose: Hover markers and the floating value label.

use livechart_core::{
    ChartConfig, DataPoint, DataWindow, LiveChart, ManualClock, PointerEvent, PropertySpec, ToggleEvent,
};

fn chart(refresh_interval: i64) -> (LiveChart, ManualClock) {
    let clock = ManualClock::new(0.0);
    let cfg = ChartConfig::default().with_session_start(0).with_refresh_interval(refresh_interval);
    let mut chart = LiveChart::with_clock("hover", cfg, Box::new(clock.clone())).expect("valid config");
    chart.on_properties_changed(&[PropertySpec::new("temp"), PropertySpec::new("humidity")]);
    chart.on_data_changed(DataWindow::from_points(vec![
        DataPoint::new(1000).with("temp", 20.0).with("humidity", 40.0),
        DataPoint::new(2000).with("temp", 22.0).with("humidity", 42.0),
    ]));
    clock.advance(1_000.0);
    (chart, clock)
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

#[test]
fn enter_creates_one_marker_per_point_per_visible_series() {
    let (mut chart, _clock) = chart(0);
    chart.toggle_line(&ToggleEvent::OFF, "humidity");
    chart.pointer(&PointerEvent::EnterChart);

    let ids: Vec<_> = chart.renderer().markers().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["temp_circle_1000", "temp_circle_2000"]);
    assert!(chart.renderer().markers().iter().all(|m| m.radius == 3.0));
}

#[test]
fn markers_enter_offset_by_refresh_interval() {
    let (mut chart, _clock) = chart(1_000);
    chart.pointer(&PointerEvent::EnterChart);
    assert_eq!(chart.renderer().markers().len(), 4);

    let scales = chart.renderer().scales();
    let m = chart.renderer().marker("temp_circle_1000").expect("marker");
    let (cx, cy) = *m.center.target();
    assert!(close(cx, scales.x.to_px(2000)));
    assert!(close(cy, scales.y.to_px(20.0)));
}

#[test]
fn hover_shows_and_hides_label() {
    let (mut chart, _clock) = chart(0);
    chart.pointer(&PointerEvent::EnterChart);
    chart.pointer(&PointerEvent::MarkerOver { id: "humidity_circle_2000".into(), page_x: 400.0, page_y: 300.0 });

    let tip = chart.tooltip().clone();
    assert_eq!(tip.text, "42");
    assert_eq!((tip.left, tip.top), (400.0, 272.0));
    assert!((tip.opacity - 0.9).abs() < 1e-6);

    chart.pointer(&PointerEvent::MarkerOut);
    assert_eq!(chart.tooltip().opacity, 0.0);
    assert_eq!(chart.tooltip().text, "42", "label is faded, not removed");

    chart.pointer(&PointerEvent::MarkerOver { id: "missing".into(), page_x: 1.0, page_y: 1.0 });
    assert_eq!(chart.tooltip().opacity, 0.0);
}

#[test]
fn pointer_move_hit_tests_markers() {
    let (mut chart, _clock) = chart(0);
    chart.pointer(&PointerEvent::EnterChart);
    // temp@1000 sits at plot (967.6, 376); margins are left 25, top 10.
    chart.pointer(&PointerEvent::Move { page_x: 992.6, page_y: 386.0 });
    assert_eq!(chart.tooltip().text, "20");
    assert!(chart.tooltip().is_visible());

    chart.pointer(&PointerEvent::Move { page_x: 100.0, page_y: 100.0 });
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn leave_removes_markers_and_refresh_does_not_recreate_them() {
    let (mut chart, _clock) = chart(0);
    chart.pointer(&PointerEvent::EnterChart);
    assert!(chart.renderer().has_markers());
    chart.pointer(&PointerEvent::LeaveChart);
    assert!(!chart.renderer().has_markers());

    let summary = chart
        .on_data_changed(DataWindow::from_points(vec![DataPoint::new(3000).with("temp", 1.0).with("humidity", 2.0)]))
        .expect("new data");
    assert_eq!(summary.markers_moved, 0);
    assert!(!chart.renderer().has_markers());
}

#[test]
fn refresh_moves_shown_markers_and_adds_new_points() {
    let (mut chart, clock) = chart(500);
    chart.pointer(&PointerEvent::EnterChart);
    assert_eq!(chart.renderer().markers().len(), 4);

    chart.on_data_changed(DataWindow::from_points(vec![
        DataPoint::new(1000).with("temp", 20.0).with("humidity", 40.0),
        DataPoint::new(2000).with("temp", 22.0).with("humidity", 42.0),
        DataPoint::new(3000).with("temp", 30.0).with("humidity", 50.0),
    ]));
    assert_eq!(chart.renderer().markers().len(), 6);
    assert!(chart.renderer().marker("temp_circle_3000").is_some());

    clock.advance(750.0);
    let scales = chart.renderer().scales();
    let frame = chart.frame();
    let m = frame.markers.iter().find(|m| m.id == "temp_circle_3000").expect("new marker");
    assert!(close(m.cx, scales.x.to_px(3000)));
    assert!(close(m.cy, scales.y.to_px(30.0)));
}

#[test]
fn removing_a_line_drops_its_markers() {
    let (mut chart, _clock) = chart(0);
    chart.pointer(&PointerEvent::EnterChart);
    chart.pointer(&PointerEvent::MarkerOver { id: "temp_circle_1000".into(), page_x: 10.0, page_y: 40.0 });
    chart.toggle_line(&ToggleEvent::OFF, "temp");

    assert!(chart.renderer().markers().iter().all(|m| m.series == "humidity"));
    assert_eq!(chart.renderer().markers().len(), 2);
    assert!(!chart.tooltip().is_visible());
}
