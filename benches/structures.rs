//! Criterion benchmarks for the roster-bench structures and sorts.
//!
//! These complement the built-in wall-clock driver: criterion repeats each
//! phase until the estimate stabilizes, which the one-shot driver cannot do.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- lookup
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use roster_bench::{insertion_sort, selection_sort, shaker_sort, BinarySearchTree, Camp, HashTable};

// ============================================================================
// HELPER FUNCTIONS - Deterministic record generation
// ============================================================================

const SQUADS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
const NAMES: [&str; 8] = [
    "Amy", "Bob", "Cat", "Dan", "Eve", "Fay", "Gus", "Hal",
];

/// Generate a deterministic shuffled record batch. Same seed = same records.
fn generate_records(count: usize, seed: u64) -> Vec<Camp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        let year = format!("{}", rng.gen_range(2000..2030));
        let squad = SQUADS[rng.gen_range(0..SQUADS.len())];
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let day = rng.gen_range(1..29);
        let month = rng.gen_range(6..9);
        let date = format!("{day:02}.{month:02}.{year}");
        let shift = format!("{}", rng.gen_range(1..4));

        records.push(Camp::new(year, squad, name, date, shift));
    }

    records
}

fn year_keys(records: &[Camp]) -> BTreeSet<String> {
    records.iter().map(|r| r.year.clone()).collect()
}

fn name_keys(records: &[Camp]) -> BTreeSet<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

// ============================================================================
// BENCHMARK: Build + Lookup per structure
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1_000, 5_000] {
        let records = generate_records(size, 42);
        let years = year_keys(&records);
        let names = name_keys(&records);

        group.throughput(Throughput::Elements(years.len() as u64));

        // Build the tree and sweep every distinct year through it
        group.bench_with_input(BenchmarkId::new("bst", size), &size, |b, _| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let mut tree = BinarySearchTree::with_capacity(records.len());
                    for record in records {
                        tree.insert(record);
                    }
                    for key in &years {
                        black_box(tree.search(key));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        // Build the fixed-bucket table and sweep every distinct year
        group.bench_with_input(BenchmarkId::new("hash_table", size), &size, |b, _| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let mut table = HashTable::new();
                    for record in records {
                        table.insert(record);
                    }
                    for key in &years {
                        black_box(table.search(key));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        // Balanced-map baseline: lookups only, map built in setup
        group.bench_with_input(BenchmarkId::new("ordered_map", size), &size, |b, _| {
            let mut map: BTreeMap<String, Camp> = BTreeMap::new();
            for record in &records {
                map.entry(record.year.clone())
                    .or_insert_with(|| record.clone());
            }

            b.iter(|| {
                for key in &years {
                    black_box(map.get(key.as_str()));
                }
            });
        });

        // Multimap baseline keyed by name: lookups only
        group.bench_with_input(BenchmarkId::new("multimap", size), &size, |b, _| {
            let mut map: BTreeMap<String, Vec<Camp>> = BTreeMap::new();
            for record in &records {
                map.entry(record.name.clone())
                    .or_default()
                    .push(record.clone());
            }

            b.iter(|| {
                for key in &names {
                    black_box(map.get(key.as_str()));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Sorts
// ============================================================================

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for size in [100, 500, 1_000] {
        let records = generate_records(size, 12345);

        group.throughput(Throughput::Elements(size as u64));

        for (label, sorter) in [
            ("selection", selection_sort as fn(&mut [Camp])),
            ("insertion", insertion_sort),
            ("shaker", shaker_sort),
        ] {
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter_batched(
                    || records.clone(),
                    |mut records| {
                        sorter(&mut records);
                        black_box(records)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    // Early-exit case: shaker sort on already-sorted input finishes in one
    // pass, which should be visible against the random-input numbers above
    group.bench_function("shaker_presorted_1000", |b| {
        let mut sorted = generate_records(1_000, 12345);
        sorted.sort();

        b.iter_batched(
            || sorted.clone(),
            |mut records| {
                shaker_sort(&mut records);
                black_box(records)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_lookup, bench_sorts);
criterion_main!(benches);
