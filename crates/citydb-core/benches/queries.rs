use citydb_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn synthetic_lines(n: usize) -> Vec<String> {
    const NAMES: &[&str] = &["Москва", "Омск", "Самара", "Саратов", "Чита", "Уфа"];
    (0..n)
        .map(|i| {
            format!(
                "{i}:{}:{}.5:{}.25:{}:Europe/Moscow:{}",
                NAMES[i % NAMES.len()],
                40 + i % 30,
                30 + i % 100,
                i * 17,
                i % 12
            )
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let lines = synthetic_lines(50_000);
    c.bench_function("from_lines 50k", |b| {
        b.iter(|| CityStore::from_lines(black_box(&lines)))
    });
}

fn bench_queries(c: &mut Criterion) {
    let (store, _) = CityStore::from_lines(synthetic_lines(50_000));

    c.bench_function("compare_cities", |b| {
        b.iter(|| store.compare_cities(black_box("Москва"), black_box("Чита")))
    });
    c.bench_function("list_cities page 500", |b| {
        b.iter(|| store.list_cities(black_box(500), black_box(20)))
    });
    c.bench_function("suggest_by_prefix", |b| {
        b.iter(|| store.suggest_by_prefix(black_box("са")))
    });
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
