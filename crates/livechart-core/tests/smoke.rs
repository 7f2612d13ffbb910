// File: crates/livechart-core/tests/smoke.rs
// Purpose: Basic end-to-end output smoke test writing a PNG and an SVG.

use livechart_core::{
    theme, ChartConfig, DataPoint, DataWindow, LiveChart, ManualClock, PointerEvent, PropertySpec, RenderOptions,
};

fn hovered_chart() -> LiveChart {
    let cfg = ChartConfig::default().with_width(640).with_session_start(0);
    let mut chart = LiveChart::with_clock("smoke", cfg, Box::new(ManualClock::new(0.0))).unwrap();
    chart.on_properties_changed(&[PropertySpec::new("temp"), PropertySpec::new("humidity")]);
    let points = (0..8)
        .map(|i| DataPoint::new(i * 5_000).with("temp", 20.0 + i as f64).with("humidity", 60.0 - 2.0 * i as f64))
        .collect();
    chart.on_data_changed(DataWindow::from_points(points));
    chart.pointer(&PointerEvent::EnterChart);
    chart.pointer(&PointerEvent::MarkerOver { id: "temp_circle_5000".into(), page_x: 120.0, page_y: 200.0 });
    chart
}

#[test]
fn render_smoke_png() {
    let chart = hovered_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn svg_mirrors_the_element_tree() {
    let chart = hovered_chart();
    let svg = chart.settled_frame().to_svg(chart.id());
    assert!(svg.contains(r#"id="smoke_svg" width="640" height="500""#));
    assert!(svg.contains(r#"<clipPath id="smoke_clip">"#));
    assert!(svg.contains(r#"id="temp_line" class="line""#));
    assert!(svg.contains(r#"id="humidity_line" class="line""#));
    assert!(svg.contains(r##"stroke="#1f77b4""##));
    assert!(svg.contains(r#"id="temp_circle_35000""#));
    assert_eq!(svg.matches("<circle").count(), 16);
    assert!(svg.contains(r#"<text class="tooltip" x="120" y="172" opacity="0.9">21</text>"#));

    chart.render_to_svg("target/test_out/smoke.svg").expect("write svg");
}

#[test]
fn named_theme_sets_background() {
    assert_eq!(theme::find("Dark").name, "dark");
    assert_eq!(theme::find("light").name, "light");
    assert_eq!(theme::find("solarized").name, "light", "unknown names fall back to light");

    let chart = hovered_chart();
    let opts = RenderOptions { theme: theme::find("dark"), draw_labels: false };
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
}
