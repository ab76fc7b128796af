//! Criterion benchmarks for the weasel generation loop.
//!
//! Measures the three per-generation operations in isolation and whole runs
//! at several population sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weasel::evolve::{
    fitness, highest_scoring, mutate, random_individual, EvolveConfig, EvolveRunner, Population,
    Target, DEFAULT_TARGET,
};
use weasel::random::create_rng;

// ===========================================================================
// Operations
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let target = Target::from(DEFAULT_TARGET);
    let mut rng = create_rng(42);
    let ind = random_individual(target.len(), &(0..=255), &mut rng);

    c.bench_function("fitness", |b| {
        b.iter(|| fitness(black_box(&ind), black_box(&target)))
    });
}

fn bench_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");

    for &chance in &[0.01, 0.1, 1.0] {
        let mut rng = create_rng(42);
        let mut ind = random_individual(DEFAULT_TARGET.len(), &(0..=255), &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(chance), &chance, |b, &p| {
            b.iter(|| mutate(black_box(&mut ind), p, &(0..=255), &mut rng))
        });
    }
    group.finish();
}

fn bench_highest_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("highest_scoring");
    let target = Target::from(DEFAULT_TARGET);

    for &size in &[10usize, 100, 1000] {
        let mut rng = create_rng(42);
        let members = (0..size)
            .map(|_| random_individual(target.len(), &(0..=255), &mut rng))
            .collect();
        let pop = Population::from_members(members).expect("non-empty");
        group.bench_with_input(BenchmarkId::from_parameter(size), &pop, |b, p| {
            b.iter(|| highest_scoring(black_box(p), black_box(&target)))
        });
    }
    group.finish();
}

// ===========================================================================
// Whole runs
// ===========================================================================

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_printable");
    group.sample_size(10);

    for &pop in &[10usize, 100, 500] {
        let config = EvolveConfig::default()
            .with_target("METHINKS IT IS LIKE A WEASEL")
            .with_character_range(b' '..=b'Z')
            .with_population_size(pop)
            .with_mutation_chance(0.04)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, cfg| {
            b.iter(|| {
                let result = EvolveRunner::run(black_box(cfg)).expect("valid config");
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fitness,
    bench_mutate,
    bench_highest_scoring,
    bench_run
);
criterion_main!(benches);
