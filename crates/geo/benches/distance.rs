//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geomatch_geo::{haversine_distance, match_closest, parse_entries, GeoPoint, InputFormat};

fn create_test_points(count: usize, offset: f64) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Boston
            let lat = 42.0 + (i as f64 * 0.01 + offset) % 2.0;
            let lon = -71.0 + (i as f64 * 0.01 + offset) % 2.0;
            GeoPoint::new(lat, lon).expect("grid point in range")
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let london = GeoPoint::new(51.5074, -0.1278).unwrap();
    let paris = GeoPoint::new(48.8566, 2.3522).unwrap();

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&london), black_box(&paris)))
    });
}

fn bench_match_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_closest");

    for size in [10, 100, 1000].iter() {
        let source = create_test_points(*size, 0.0);
        let target = create_test_points(*size, 0.005);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| match_closest(black_box(&source), black_box(&target)))
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| geomatch_geo::match_closest_parallel(black_box(&source), black_box(&target)))
        });
    }

    group.finish();
}

fn bench_entry_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_parsing");

    group.bench_function("decimal", |b| {
        b.iter(|| parse_entries(black_box("42.3601,-71.0589; 40.7128,-74.0060"), InputFormat::Decimal))
    });

    group.bench_function("dms", |b| {
        b.iter(|| parse_entries(black_box("42°30'10\"N,07°10'25\"W; 404231N,0740059W"), InputFormat::Dms))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_match_closest,
    bench_entry_parsing
);
criterion_main!(benches);
