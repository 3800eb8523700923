//! # roster-bench
//!
//! Benchmark harness comparing in-memory lookup and ordering strategies over
//! a fixed roster record.
//!
//! ## Architecture
//!
//! - **Record**: the `Camp` record and its 4-field total order
//! - **Dataset**: line-oriented record source and sorted-output sink
//! - **Store**: hand-built binary search tree and fixed-bucket hash table
//! - **Sort**: selection, insertion and shaker sorts
//! - **Bench**: the driver that loads, builds, times and reports
//!
//! ## Measurement Principles
//!
//! 1. **Isolation**: every structure populates its own copy of the records;
//!    no storage is shared across structures
//! 2. **Sequential phases**: load, build and measure never overlap, so each
//!    reported time belongs to exactly one structure
//! 3. **Representative keys**: lookup key sets are the distinct `year` and
//!    `name` values actually present in the loaded data
//! 4. **Fixed instruments**: the tree, table and sorts are specialized to
//!    the one record shape on purpose; generalizing them would change what
//!    is being measured

// ============================================================================
// Module declarations
// ============================================================================

/// The `Camp` record and its ordering contract
pub mod record;

/// Record source and sorted-output sink
pub mod dataset;

/// Hand-built search structures: binary search tree, hash table
pub mod store;

/// In-place comparison sorts
pub mod sort;

/// Benchmark driver: sizes, key sets, timed phases, suites
pub mod bench;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use bench::SIZES;
pub use dataset::{read_records, write_sorted, DatasetError};
pub use record::Camp;
pub use sort::{insertion_sort, selection_sort, shaker_sort};
pub use store::{BinarySearchTree, HashTable};
