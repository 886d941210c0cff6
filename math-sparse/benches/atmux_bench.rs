//! Benchmark: CRS conversion and transpose product
//!
//! Run with:
//!   cargo bench -p math-audio-sparse --bench atmux_bench
//!
//! Thread scaling for the parallel kernel:
//!   RAYON_NUM_THREADS=1 cargo bench -p math-audio-sparse --bench atmux_bench
//!   RAYON_NUM_THREADS=4 cargo bench -p math-audio-sparse --bench atmux_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use math_audio_sparse::{CrsMatrix, DenseMatrix, Vector, atmux, atmux_parallel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn sparse_input(n: usize) -> (DenseMatrix, CrsMatrix, Vector) {
    let mut rng = StdRng::seed_from_u64(17);
    let mut dense = DenseMatrix::new(n, n).unwrap();
    dense.fill_random_sparse(&mut rng, 0.66);
    let crs = CrsMatrix::from_dense(&dense).unwrap();
    let mut x = Vector::new(n).unwrap();
    x.fill_random(&mut rng);
    (dense, crs, x)
}

fn bench_from_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("crs_from_dense");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[128, 512, 1024] {
        let (dense, _, _) = sparse_input(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &dense, |b, dense| {
            b.iter(|| black_box(CrsMatrix::from_dense(dense).unwrap()));
        });
    }

    group.finish();
}

fn bench_atmux(c: &mut Criterion) {
    let mut group = c.benchmark_group("atmux");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[512, 2048] {
        let (_, crs, x) = sparse_input(n);
        let mut y = vec![0.0; n];
        group.throughput(Throughput::Elements(crs.nnz() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &crs, |b, crs| {
            b.iter(|| {
                atmux(crs, x.as_slice(), &mut y);
                black_box(&y);
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &crs, |b, crs| {
            b.iter(|| {
                atmux_parallel(crs, x.as_slice(), &mut y);
                black_box(&y);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_from_dense, bench_atmux);
criterion_main!(benches);
