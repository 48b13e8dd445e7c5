//! Curve point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use modcurve::Curve;
use std::hint::black_box;

fn test_curve() -> Curve {
    Curve::new(2, 3, 97).unwrap()
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = curve.point(1, 43);
    let q = curve.point(3, 6);
    group.bench_function("add", |b| b.iter(|| curve.add(black_box(&p), black_box(&q))));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = curve.point(3, 6);
    group.bench_function("double", |b| b.iter(|| curve.add(black_box(&p), black_box(&p))));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = curve.point(1, 43);
    group.bench_function("point-scalar mul", |b| b.iter(|| curve.mul(black_box(&p), 49)));
}

fn bench_evaluate<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    group.bench_function("evaluate", |b| b.iter(|| curve.evaluate(black_box(4))));
}

fn bench_point(c: &mut Criterion) {
    let curve = test_curve();
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group, &curve);
    bench_point_double(&mut group, &curve);
    bench_point_mul(&mut group, &curve);
    bench_evaluate(&mut group, &curve);
    group.finish();
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("point counting");
    group.bench_function("count points", |b| b.iter(|| test_curve().order()));
    group.bench_function("subgroup order", |b| {
        let curve = test_curve();
        b.iter(|| curve.subgroup_order())
    });
    group.bench_function("list points", |b| {
        let curve = test_curve();
        b.iter(|| curve.points().count())
    });
    group.finish();
}

criterion_group!(benches, bench_point, bench_counting);
criterion_main!(benches);
