//! Benchmarks for point picking.
//!
//! Run with: cargo bench -p scan-pick
//!
//! Include the rayon variant with: cargo bench -p scan-pick --features parallel

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nalgebra::{Point3, Vector3};
use scan_pick::pick_point;
use scan_types::{CloudSample, Ray};

// =============================================================================
// Test Cloud Generation
// =============================================================================

/// Create a noisy grid of samples on the plane z = -3, facing the camera.
fn create_wall(side: u32) -> Vec<CloudSample> {
    let mut samples = Vec::with_capacity((side * side) as usize);
    let step = 4.0 / f64::from(side);

    for i in 0..side {
        for j in 0..side {
            let x = f64::from(i).mul_add(step, -2.0);
            let y = f64::from(j).mul_add(step, -2.0);
            let noise = (x * 13.0).sin() * (y * 7.0).cos() * 0.01;
            samples.push(CloudSample::from_coords(x, y, -3.0 + noise, 2.0));
        }
    }

    samples
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("PickPoint");

    let ray = Ray::new(Point3::new(0.1, -0.2, 0.0), -Vector3::z());
    // A ray aimed away from the wall forces the angular fallback tier.
    let miss_ray = Ray::new(
        Point3::origin(),
        Vector3::new(1.0, 0.0, -0.2).normalize(),
    );

    let test_cases = [
        ("wall_10k", create_wall(100)),
        ("wall_50k", create_wall(224)),
        ("wall_250k", create_wall(500)),
    ];

    for (name, samples) in &test_cases {
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::new("inside", name), samples, |b, samples| {
            b.iter(|| pick_point(black_box(&ray), black_box(samples), black_box(0.02)));
        });

        group.bench_with_input(BenchmarkId::new("outside", name), samples, |b, samples| {
            b.iter(|| pick_point(black_box(&miss_ray), black_box(samples), black_box(0.02)));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", name), samples, |b, samples| {
            b.iter(|| {
                scan_pick::pick_point_parallel(black_box(&ray), black_box(samples), black_box(0.02))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_pick);
criterion_main!(benches);
