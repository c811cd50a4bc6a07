use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use bst_map::{BstMap, is_bst_pre_order};

const N: usize = 10_000;

/// Sorted input degenerates the tree into a chain, so keep it small.
const CHAIN: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(CHAIN);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("BstMap", CHAIN), |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    c.bench_function("get_random", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(map.get(k));
            }
        });
    });
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    c.bench_function("remove_random", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_median(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    c.bench_function("median_random", |b| b.iter(|| black_box(map.median())));
}

fn bench_render(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: BstMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("render");
    group.bench_function("print_keys_in_order", |b| b.iter(|| map.print_keys_in_order()));
    group.bench_function("pretty_print_keys", |b| b.iter(|| map.pretty_print_keys()));
    group.finish();
}

fn bench_is_bst_pre_order(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: BstMap<i64, ()> = keys.iter().map(|&k| (k, ())).collect();
    let walk: Vec<i64> = map.pre_order_keys().into_iter().copied().collect();

    c.bench_function("is_bst_pre_order", |b| b.iter(|| is_bst_pre_order(black_box(&walk))));
}

criterion_group!(insert_benches, bench_insert_random, bench_insert_ordered,);

criterion_group!(query_benches, bench_get_random, bench_median, bench_remove_random,);

criterion_group!(export_benches, bench_render, bench_is_bst_pre_order,);

criterion_main!(insert_benches, query_benches, export_benches);
