use livechart_core::{ChartConfig, DataPoint, DataWindow, LiveChart, ManualClock, PropertySpec, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn window(n: i64, offset: i64) -> DataWindow {
    let points = (0..n)
        .map(|i| {
            let t = (i + offset) as f64;
            DataPoint::new((i + offset) * 1_000)
                .with("temp", 50.0 + 20.0 * (t * 0.1).sin())
                .with("humidity", 40.0 + 10.0 * (t * 0.05).cos())
        })
        .collect();
    DataWindow::from_points(points)
}

fn build_chart() -> (LiveChart, ManualClock) {
    let clock = ManualClock::new(0.0);
    let cfg = ChartConfig::default().with_session_start(0);
    let mut chart = LiveChart::with_clock("bench", cfg, Box::new(clock.clone())).expect("config");
    chart.on_properties_changed(&[PropertySpec::new("temp"), PropertySpec::new("humidity")]);
    (chart, clock)
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    group.bench_function("refresh_60_points", |b| {
        let (mut chart, clock) = build_chart();
        let mut offset = 0;
        b.iter(|| {
            offset += 1;
            clock.advance(1_000.0);
            black_box(chart.on_data_changed(window(60, offset)));
        });
    });
    group.bench_function("frame_png_bytes", |b| {
        let (mut chart, clock) = build_chart();
        chart.on_data_changed(window(60, 0));
        clock.advance(375.0);
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        b.iter(|| black_box(chart.render_to_png_bytes(&opts).expect("render")));
    });
    group.finish();
}

criterion_group!(benches, bench_refresh);
criterion_main!(benches);
