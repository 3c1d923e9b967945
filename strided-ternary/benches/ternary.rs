//! Ternary kernel benchmarks.
//!
//! Compares the contiguous fast path, strided walks (positive, negative and
//! zero strides) and the checked entry point over the same data.
//!
//! Run with: cargo bench --bench ternary
//! (add `--features simd` to measure runtime SIMD dispatch)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use strided_ternary::{ternary, ternary_ndarray_unchecked, try_ternary, ArrayLikeObject};

fn random_vec(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

fn bench_strides(c: &mut Criterion) {
    let mut group = c.benchmark_group("ternary_strides");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        // Room for stride 2 on every array.
        let x = random_vec(2 * n, 1);
        let y = random_vec(2 * n, 2);
        let z = random_vec(2 * n, 3);
        let len = n as isize;

        for (label, strides) in [
            ("unit", [1, 1, 1, 1]),
            ("stride2", [2, 2, 2, 1]),
            ("negative", [-1, -2, -1, -1]),
            ("broadcast_z", [1, 1, 0, 1]),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |bench, _| {
                let mut out = vec![0.0; 2 * n];
                bench.iter(|| {
                    ternary(
                        (&x, &y, &z, &mut out),
                        [len],
                        strides,
                        |a: f64, b: f64, c: f64| a.mul_add(b, c),
                    );
                    black_box(&out);
                })
            });
        }
    }
    group.finish();
}

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("ternary_entry_points");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let n = 100_000usize;
    group.throughput(Throughput::Elements(n as u64));
    let x = random_vec(2 * n, 4);
    let strides = [2, 2, 2, 1];
    let len = n as isize;

    group.bench_function("plain", |bench| {
        let mut out = vec![0.0; n];
        bench.iter(|| {
            ternary((&x, &x, &x, &mut out), [len], strides, |a, b, c| a + b + c);
            black_box(&out);
        })
    });

    group.bench_function("checked", |bench| {
        let mut out = vec![0.0; n];
        bench.iter(|| {
            try_ternary((&x, &x, &x, &mut out), [len], strides, |a, b, c| a + b + c).unwrap();
            black_box(&out);
        })
    });

    group.bench_function("unchecked", |bench| {
        let mut out = vec![0.0; n];
        bench.iter(|| {
            // SAFETY: 2n inputs cover stride 2, n outputs cover stride 1.
            unsafe {
                ternary_ndarray_unchecked(
                    (&x, &x, &x, &mut out),
                    [len],
                    strides,
                    [0; 4],
                    |a, b, c| a + b + c,
                )
            };
            black_box(&out);
        })
    });

    let obj = ArrayLikeObject::from_slice(&x);
    group.bench_function("sparse_object", |bench| {
        let mut out = vec![0.0; n];
        bench.iter(|| {
            ternary((&obj, &obj, &obj, &mut out), [len], strides, |a, b, c| {
                a.unwrap_or(0.0) + b.unwrap_or(0.0) + c.unwrap_or(0.0)
            });
            black_box(&out);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_strides, bench_entry_points);
criterion_main!(benches);
