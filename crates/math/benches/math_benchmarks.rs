//! Benchmarks for hotelprep-math operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotelprep_math::{ScaleMethod, Scaler, mode, quantile};
use hotelprep_traits::{Fit, Transform};
use ndarray::Array1;
use polars::prelude::*;
use rand::Rng;

fn random_array(n: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_iter((0..n).map(|_| rng.r#gen::<f64>() * 300.0))
}

fn random_counts(n: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_iter((0..n).map(|_| f64::from(rng.gen_range(0..5))))
}

fn random_frame(rows: usize) -> DataFrame {
    let mut rng = rand::thread_rng();
    let lead: Vec<i64> = (0..rows).map(|_| rng.gen_range(0..700)).collect();
    let adr: Vec<f64> = (0..rows).map(|_| rng.r#gen::<f64>() * 300.0).collect();
    let flag: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();
    df! { "lead_time" => lead, "adr" => adr, "is_canceled" => flag }.unwrap()
}

fn bench_quantile(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_array(size);
            b.iter(|| quantile(black_box(&data), black_box(0.75)).unwrap());
        });
    }

    group.finish();
}

fn bench_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_counts(size);
            b.iter(|| mode(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

fn bench_scaler(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaler");

    for method in [ScaleMethod::Standard, ScaleMethod::MinMax, ScaleMethod::Robust] {
        let df = random_frame(100_000);
        group.bench_with_input(BenchmarkId::new("fit", method), &df, |b, df| {
            b.iter(|| Scaler::new(method).fit(black_box(df)).unwrap());
        });

        let params = Scaler::new(method).fit(&df).unwrap();
        group.bench_with_input(BenchmarkId::new("transform", method), &df, |b, df| {
            b.iter(|| params.transform(black_box(df.clone())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quantile, bench_mode, bench_scaler);
criterion_main!(benches);
