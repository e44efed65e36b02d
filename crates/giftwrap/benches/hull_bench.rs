//! Criterion benchmarks for gift wrapping.
//! Focus sizes: n in {16, 128, 1024, 4096}; disk and grid clouds of half
//! extent 50 (grid clouds carry many duplicates and collinear runs).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use giftwrap::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use giftwrap::hull::{dedup, find_hull, polygon_area, Dedup, HullFinder};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 128, 1024, 4096] {
        for (label, shape) in [("disk", CloudShape::Disk), ("grid", CloudShape::Grid)] {
            let cfg = CloudCfg {
                count: n,
                shape,
                half_extent: 50.0,
            };
            group.bench_with_input(BenchmarkId::new(format!("find_hull/{label}"), n), &n, |b, _| {
                b.iter_batched(
                    || draw_cloud(cfg, ReplayToken::new(43, n as u64)),
                    |cloud| {
                        let _hull = find_hull(&cloud);
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.bench_with_input(BenchmarkId::new("scan_only/disk", n), &n, |b, &n| {
            let cfg = CloudCfg {
                count: n,
                shape: CloudShape::Disk,
                half_extent: 1.0,
            };
            b.iter_batched(
                || HullFinder::new(dedup(&draw_cloud(cfg, ReplayToken::new(44, 0)), Dedup::Exact)),
                |finder| {
                    let _hull = finder.scan();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut area = c.benchmark_group("area");
    for &n in &[16usize, 256] {
        // regular n-gon, every vertex on the hull
        let hull: Vec<_> = (0..n)
            .map(|k| {
                let t = std::f64::consts::TAU * k as f64 / n as f64;
                giftwrap::Point::new(t.cos(), t.sin())
            })
            .collect();
        area.bench_with_input(BenchmarkId::new("polygon_area", n), &hull, |b, h| {
            b.iter(|| polygon_area(h))
        });
    }
    area.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
