//! Compares the in-place transposes against the out-of-place baseline.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use transpose::matrix::transpose::transpose;
use transpose::{transpose_square, transpose_square_flat};

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for size in [64usize, 256, 1024] {
        let flat: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let nested: Vec<Vec<f64>> = flat.chunks(size).map(|row| row.to_vec()).collect();

        group.bench_with_input(BenchmarkId::new("nested in-place", size), &size, |b, _| {
            let mut m = nested.clone();
            b.iter(|| transpose_square(black_box(&mut m)));
        });

        group.bench_with_input(BenchmarkId::new("flat in-place", size), &size, |b, &n| {
            let mut m = flat.clone();
            b.iter(|| transpose_square_flat(black_box(&mut m), n));
        });

        group.bench_with_input(BenchmarkId::new("out-of-place", size), &size, |b, &n| {
            let mut dst = vec![0.0; n * n];
            b.iter(|| transpose(black_box(&flat), black_box(&mut dst), n, n));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
