//! Benchmark driver: load, build, measure, report.
//!
//! ## Protocol
//!
//! For every size in [`SIZES`] the driver loads `{size}.txt`, derives the
//! lookup key sets from the loaded data (every distinct `year` for the tree
//! and hash table, every distinct `name` for the multimap), then times each
//! structure's phase in isolation and prints one
//! `"<structure>: <seconds> seconds"` line per structure. Phases never
//! overlap and every structure populates its own copy of the records, so
//! each reported number is attributable to exactly one structure.
//!
//! The tree and hash table are timed over build **plus** the full lookup
//! sweep; the two standard-library baselines are built outside the timer and
//! time the lookup sweep alone. The hand-built structures pay their
//! construction cost inside the measurement, the baselines answer from a
//! ready map.
//!
//! The sort suite loads three independent copies per size, times each sort,
//! and persists the insertion-sorted copy as `data_{size}_sorted.txt`.
//!
//! Everything here is single-threaded and sequential: concurrency would make
//! the wall-clock numbers incomparable.

use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::dataset::{self, DatasetError};
use crate::record::Camp;
use crate::sort::{insertion_sort, selection_sort, shaker_sort};
use crate::store::{BinarySearchTree, HashTable};

/// The fixed list of input sizes, one input file per entry.
pub const SIZES: [usize; 7] = [100, 500, 1000, 2000, 3000, 5000, 100000];

/// Every distinct `year` in the data, ordered: the tree/hash lookup key set.
pub fn distinct_years(records: &[Camp]) -> BTreeSet<String> {
    records.iter().map(|r| r.year.clone()).collect()
}

/// Every distinct `name` in the data, ordered: the multimap lookup key set.
pub fn distinct_names(records: &[Camp]) -> BTreeSet<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

// ============================================================================
// Measured Phases
// ============================================================================

/// Build a [`BinarySearchTree`] from its own copy of the records and sweep
/// every key through it. Build and lookups are timed together.
pub fn time_bst(records: &[Camp], keys: &BTreeSet<String>) -> Duration {
    let start = Instant::now();
    let mut tree = BinarySearchTree::with_capacity(records.len());
    for record in records {
        tree.insert(record.clone());
    }
    for key in keys {
        black_box(tree.search(key));
    }
    start.elapsed()
}

/// Build a [`HashTable`] from its own copy of the records and sweep every
/// key through it. Build and lookups are timed together.
pub fn time_hash_table(records: &[Camp], keys: &BTreeSet<String>) -> Duration {
    let start = Instant::now();
    let mut table = HashTable::new();
    for record in records {
        table.insert(record.clone());
    }
    for key in keys {
        black_box(table.search(key));
    }
    start.elapsed()
}

/// Sweep every key through a balanced ordered map keyed by `year`.
///
/// The map is built outside the timer; on duplicate years the first record
/// wins. Only the lookup sweep is measured.
pub fn time_ordered_map(records: &[Camp], keys: &BTreeSet<String>) -> Duration {
    let mut map: BTreeMap<String, Camp> = BTreeMap::new();
    for record in records {
        map.entry(record.year.clone()).or_insert_with(|| record.clone());
    }

    let start = Instant::now();
    for key in keys {
        black_box(map.get(key.as_str()));
    }
    start.elapsed()
}

/// Sweep every key through a multi-valued ordered map keyed by `name`.
///
/// Duplicate names accumulate in per-key vectors. The map is built outside
/// the timer; only the lookup sweep is measured.
pub fn time_multimap(records: &[Camp], keys: &BTreeSet<String>) -> Duration {
    let mut map: BTreeMap<String, Vec<Camp>> = BTreeMap::new();
    for record in records {
        map.entry(record.name.clone())
            .or_default()
            .push(record.clone());
    }

    let start = Instant::now();
    for key in keys {
        black_box(map.get(key.as_str()));
    }
    start.elapsed()
}

/// Run one sorter over a record sequence and return the elapsed wall clock.
pub fn time_sort(records: &mut [Camp], sorter: fn(&mut [Camp])) -> Duration {
    let start = Instant::now();
    sorter(black_box(records));
    start.elapsed()
}

// ============================================================================
// Suites
// ============================================================================

fn report(name: &str, elapsed: Duration) {
    println!("{name}: {:.6} seconds", elapsed.as_secs_f64());
}

/// Run the lookup benchmarks for every size, reading `{size}.txt` from
/// `data_dir`.
///
/// # Errors
///
/// Fails on the first unreadable input file; nothing is retried.
pub fn run_lookup_suite(data_dir: &Path, sizes: &[usize]) -> Result<(), DatasetError> {
    for &size in sizes {
        let path = data_dir.join(dataset::input_file_name(size));
        let records = dataset::read_records(&path, size)?;

        let years = distinct_years(&records);
        let names = distinct_names(&records);

        println!("Lookup benchmarks, size {size}:");
        report("Binary search tree", time_bst(&records, &years));
        report("Hash table", time_hash_table(&records, &years));
        report("Ordered map", time_ordered_map(&records, &years));
        report("Multimap", time_multimap(&records, &names));
        println!();
    }
    Ok(())
}

/// Run the sort benchmarks for every size and persist the insertion-sorted
/// copy as `data_{size}_sorted.txt` next to the input.
///
/// Each sorter gets an independently loaded copy of the input so no run
/// benefits from another's work.
///
/// # Errors
///
/// Fails on the first unreadable input or unwritable output; nothing is
/// retried.
pub fn run_sort_suite(data_dir: &Path, sizes: &[usize]) -> Result<(), DatasetError> {
    for &size in sizes {
        let input = data_dir.join(dataset::input_file_name(size));
        let mut selection_copy = dataset::read_records(&input, size)?;
        let mut insertion_copy = dataset::read_records(&input, size)?;
        let mut shaker_copy = dataset::read_records(&input, size)?;

        println!("Sort benchmarks, size {size}:");
        report("Selection sort", time_sort(&mut selection_copy, selection_sort));
        report("Insertion sort", time_sort(&mut insertion_copy, insertion_sort));
        report("Shaker sort", time_sort(&mut shaker_copy, shaker_sort));
        println!();

        let output = data_dir.join(dataset::sorted_file_name(size));
        dataset::write_sorted(&output, &insertion_copy)?;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
