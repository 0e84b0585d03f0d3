use std::hint::black_box;

use creal_core::Real;
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_series_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for &prec in &[-64i64, -256, -1024] {
        group.bench_function(format!("exp_1_at_{}", -prec), |b| {
            b.iter(|| {
                // fresh node each iteration so the tracker cannot serve the
                // answer from a previous run
                let e = Real::from(1).exp().unwrap();
                black_box(e.approximate(prec).unwrap());
            })
        });

        group.bench_function(format!("sqrt_2_at_{}", -prec), |b| {
            b.iter(|| {
                let s = Real::from(2).sqrt();
                black_box(s.approximate(prec).unwrap());
            })
        });

        group.bench_function(format!("ln_2_at_{}", -prec), |b| {
            b.iter(|| {
                let l = Real::from(2).ln().unwrap();
                black_box(l.approximate(prec).unwrap());
            })
        });
    }

    group.finish();
}

fn benchmark_dag_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dag");

    group.bench_function("continued_fraction_20_terms", |b| {
        let terms: Vec<i64> = (1..=20).collect();
        b.iter(|| {
            let cf = Real::continued_fraction_i64(&terms);
            black_box(cf.approximate(-256).unwrap());
        })
    });

    group.bench_function("pi_cached_rescale", |b| {
        // warm the shared tracker once, then measure cache hits
        let pi = Real::pi();
        pi.approximate(-1024).unwrap();
        b.iter(|| black_box(pi.approximate(-512).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_series_kernels, benchmark_dag_evaluation);
criterion_main!(benches);
