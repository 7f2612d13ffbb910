// File: crates/livechart-core/tests/data.rs
// Purpose: Data feed model and configuration loading.

use livechart_core::{ChartConfig, ChartError, DataPoint, DataWindow, PropertySpec};

#[test]
fn points_parse_from_flat_json() {
    let window: DataWindow = serde_json::from_str(
        r#"[{"timestamp":1000,"temp":20,"humidity":40},{"timestamp":2000,"temp":22.5}]"#,
    )
    .expect("parse window");
    assert_eq!(window.len(), 2);
    assert_eq!(window.points()[0].value("humidity"), 40.0);
    assert_eq!(window.points()[1].value("temp"), 22.5);
    assert!(window.points()[1].value("humidity").is_nan());

    let props: Vec<PropertySpec> = serde_json::from_str(r#"[{"name":"temp"},{"name":"humidity"}]"#).expect("parse");
    assert_eq!(props[1], PropertySpec::new("humidity"));
}

#[test]
fn window_push_keeps_order() {
    let mut w = DataWindow::new();
    assert!(w.push(DataPoint::new(10)));
    assert!(w.push(DataPoint::new(10)));
    assert!(!w.push(DataPoint::new(5)));
    assert!(w.push(DataPoint::new(20)));
    assert_eq!(w.len(), 3);
    assert_eq!(w.last_timestamp(), Some(20));
}

#[test]
fn visible_slice_and_pruning() {
    let mut w = DataWindow::from_points((0..10).map(|i| DataPoint::new(i * 10_000)).collect());
    let visible = w.visible(90_000, 60_000);
    assert_eq!(visible.first().map(|p| p.timestamp), Some(30_000));
    assert_eq!(visible.len(), 7);
    assert!(w.visible(-1, 10).is_empty());

    assert_eq!(w.prune_before(30_000), 3);
    assert_eq!(w.points()[0].timestamp, 30_000);
}

#[test]
fn config_defaults_match_host_layout() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.height, 500);
    assert_eq!((cfg.margins.top, cfg.margins.right, cfg.margins.bottom, cfg.margins.left), (10, 15, 20, 25));
    assert_eq!(cfg.window_ms, 60_000);
    assert_eq!(cfg.transition_ms, 750.0);
    assert_eq!(cfg.plot_height(), 470.0);
    assert_eq!(cfg.with_width(640).plot_width(), 600.0);
}

#[test]
fn config_from_partial_json() {
    let cfg = ChartConfig::from_json_str(r#"{"width": 800, "window_ms": 30000, "session_start_ms": 5}"#)
        .expect("valid config");
    assert_eq!(cfg.plot_width(), 760.0);
    assert_eq!(cfg.window_ms, 30_000);
    assert_eq!(cfg.session_start_ms, Some(5));
    assert_eq!(cfg.y_domain, [0.0, 100.0]);
}

#[test]
fn config_rejects_bad_values() {
    assert!(matches!(ChartConfig::from_json_str(r#"{"window_ms": 0}"#), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::from_json_str(r#"{"width": 30}"#), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::from_json_str(r#"{"y_domain": [5, 1]}"#), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::from_json_str("{not json"), Err(ChartError::ConfigParse(_))));
    // Margin sums past u32/i32 range still leave no plot area.
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"margins":{"left":4294967295,"right":1,"top":0,"bottom":0}}"#),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"margins":{"left":3000000000,"right":15,"top":10,"bottom":20}}"#),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"margins":{"left":25,"right":15,"top":4294967295,"bottom":4294967295}}"#),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(
        ChartConfig::from_json_file("definitely/missing.json"),
        Err(ChartError::Io { .. })
    ));
}
