use livechart_core::geometry::PathGeometry;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_points(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            // simple waveform with drift
            (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect()
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_path");
    for &n in &[60usize, 600, 6_000] {
        let pts = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pts, |b, pts| {
            b.iter(|| black_box(PathGeometry::monotone_x(pts)));
        });
        let from = PathGeometry::monotone_x(&pts);
        let to = PathGeometry::monotone_x(&pts.iter().map(|&(x, y)| (x - 1.0, y)).collect::<Vec<_>>());
        group.bench_with_input(BenchmarkId::new("tween", n), &(from, to), |b, (from, to)| {
            b.iter(|| black_box(PathGeometry::interpolate(from, to, 0.5)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
