/*
 * Starfield Benchmark
 *
 * Benchmarks for the three per-run costs of the starfield: generating the
 * initial population, advancing every star's depth for one tick, and
 * emitting the full geometry buffer (sequential and parallel).
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use starfield::{Config, GeometryBuffer, StarField};

fn bench_config(star_count: usize) -> Config {
    Config {
        star_count,
        screen_size: vec2(1920.0, 1080.0),
        ..Config::default()
    }
}

// Benchmark population generation, including the rejection sampling and the
// one-off depth sort
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for star_count in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(star_count), star_count, |b, &n| {
            let config = bench_config(n);
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(1);
                black_box(StarField::generate(config, &mut rng).unwrap());
            });
        });
    }

    group.finish();
}

// Benchmark one depth-advance tick over the whole population
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for star_count in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(star_count), star_count, |b, &n| {
            let mut rng = StdRng::seed_from_u64(2);
            let mut field = StarField::generate(bench_config(n), &mut rng).unwrap();
            b.iter(|| {
                black_box(field.advance(1.0 / 60.0));
            });
        });
    }

    group.finish();
}

// Benchmark geometry emission for a full frame
fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");

    for star_count in [10_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("sequential", star_count),
            star_count,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(3);
                let config = bench_config(n);
                let field = StarField::generate(config, &mut rng).unwrap();
                let mut buffer = GeometryBuffer::new(n, config.texture_extent);
                b.iter(|| {
                    buffer.fill(black_box(&field));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", star_count),
            star_count,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(3);
                let config = bench_config(n);
                let field = StarField::generate(config, &mut rng).unwrap();
                let mut buffer = GeometryBuffer::new(n, config.texture_extent);
                b.iter(|| {
                    buffer.fill_parallel(black_box(&field));
                });
            },
        );
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_generate, bench_advance, bench_emission
}

criterion_main!(benches);
