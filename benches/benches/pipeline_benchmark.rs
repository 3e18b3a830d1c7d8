//! Benchmarks for the selection and estimation pipeline.
//!
//! Run with: `cargo bench --package vaxrisk-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vaxrisk_bench::{TableShape, synthetic_cases, synthetic_vaccinations};
use vaxrisk_lib::{
    Area, GeographicSelection, ModelOptions, PINNED_COUNTRIES, RiskParameters, list_countries,
    resolve_selection, run_model,
};

fn shapes() -> Vec<(&'static str, TableShape)> {
    vec![
        (
            "small",
            TableShape {
                days: 15,
                regions: 5,
                sub_regions: 20,
            },
        ),
        (
            "us-sized",
            TableShape {
                days: 15,
                regions: 58,
                sub_regions: 60,
            },
        ),
    ]
}

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (name, shape) in shapes() {
        let cases = synthetic_cases(shape);
        group.throughput(Throughput::Elements(shape.rows() as u64));

        let country = GeographicSelection::new("US", Some(Area::All), None);
        group.bench_with_input(BenchmarkId::new("country", name), &cases, |b, cases| {
            b.iter(|| resolve_selection(black_box(cases), &country));
        });

        let county = GeographicSelection::new(
            "US",
            Some(Area::Named("Region 0".into())),
            Some(Area::Named("County 0".into())),
        );
        group.bench_with_input(BenchmarkId::new("county", name), &cases, |b, cases| {
            b.iter(|| resolve_selection(black_box(cases), &county));
        });

        group.bench_with_input(BenchmarkId::new("list-countries", name), &cases, |b, cases| {
            b.iter(|| list_countries(black_box(cases), &PINNED_COUNTRIES));
        });
    }

    group.finish();
}

fn model_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("model");
    let params = RiskParameters::default();
    let options = ModelOptions::default();

    for (name, shape) in shapes() {
        let cases = synthetic_cases(shape);
        let vaccinations = synthetic_vaccinations(shape);
        let selection = GeographicSelection::new("US", Some(Area::Named("Region 1".into())), None);
        group.throughput(Throughput::Elements(shape.rows() as u64));

        group.bench_function(BenchmarkId::new("run_model", name), |b| {
            b.iter(|| {
                run_model(
                    black_box(&cases),
                    black_box(&vaccinations),
                    &selection,
                    &params,
                    &options,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, resolve_benchmark, model_benchmark);
criterion_main!(benches);
