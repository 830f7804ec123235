use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planefit_ransac::{fit_plane_least_squares, ransac_plane, ExecutionStrategy, RansacParams};

/// Generate `n` points where roughly a quarter are far from the plane `z = 0.3x - 0.2y + 1`.
fn generate_points(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let x = (t * 0.37).sin() * 5.0;
            let y = (t * 0.13).cos() * 5.0;
            let z = if i % 4 == 3 {
                5.0 * (t * 0.71).sin() + 2.0
            } else {
                0.3 * x - 0.2 * y + 1.0 + 0.005 * (t * 3.1).sin()
            };
            [x, y, z]
        })
        .collect()
}

fn bench_ransac_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("ransac_plane");
    for &n in &[130, 1_000, 10_000] {
        let points = generate_points(n);
        for execution in [ExecutionStrategy::Serial, ExecutionStrategy::Parallel] {
            let params = RansacParams {
                confidence: 0.9999,
                outlier_ratio: 0.3,
                random_seed: Some(0),
                execution,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{execution:?}"), n),
                &points,
                |b, points| {
                    b.iter(|| {
                        let _ = std::hint::black_box(ransac_plane(points, &params));
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_fit_plane_least_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_plane_least_squares");
    for &n in &[100, 10_000] {
        let points = generate_points(n)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| i % 4 != 3)
            .map(|(_, p)| p)
            .collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let _ = std::hint::black_box(fit_plane_least_squares(points));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ransac_plane, bench_fit_plane_least_squares);
criterion_main!(benches);
