//! Fixed-bucket hash table over [`Camp`] records, keyed by `year`.
//!
//! ## Hashing
//!
//! The bucket index is a polynomial hash folded per byte:
//! `h = (h * 31 + byte) % bucket_count`. The reduction happens at every
//! step, so the intermediate value never exceeds
//! `(bucket_count - 1) * 31 + 255`.
//!
//! ## Degradation
//!
//! The bucket count is fixed at construction and never grows, so the load
//! factor climbs with input size and lookups degrade toward a linear chain
//! scan. That is the point: the benchmark exposes what an under-sized table
//! costs at 100 000 records.

use crate::record::Camp;

/// Bucket count used by the benchmark driver.
pub const DEFAULT_BUCKETS: usize = 100;

/// Separate-chaining hash table with a fixed bucket count.
///
/// Chains preserve insertion order and keep duplicates; `search` returns the
/// first record in the key's chain whose `year` matches.
#[derive(Debug)]
pub struct HashTable {
    /// One chain per bucket, sized once at construction
    buckets: Vec<Vec<Camp>>,

    /// Total number of stored records
    len: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Create a table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a table with a fixed number of buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert_ne!(bucket_count, 0, "bucket count must be non-zero");
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        }
    }

    /// Number of buckets (never changes after construction).
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of stored records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket index for a key: incremental `h*31 + byte` modulo bucket count.
    fn bucket_index(&self, key: &str) -> usize {
        let count = self.buckets.len();
        key.bytes()
            .fold(0usize, |h, byte| (h * 31 + byte as usize) % count)
    }

    /// Append a record to the chain at its year's bucket.
    ///
    /// Duplicates are permitted; nothing is ever overwritten.
    pub fn insert(&mut self, record: Camp) {
        let index = self.bucket_index(&record.year);
        self.buckets[index].push(record);
        self.len += 1;
    }

    /// Search a year key: scan the key's chain for the first `year` match.
    pub fn search(&self, year: &str) -> Option<&Camp> {
        let index = self.bucket_index(year);
        self.buckets[index].iter().find(|record| record.year == year)
    }

    /// Length of the chain the key hashes into.
    ///
    /// Counts every record in the bucket, matching or not, so collisions
    /// and duplicates are visible here.
    pub fn chain_len(&self, key: &str) -> usize {
        self.buckets[self.bucket_index(key)].len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
