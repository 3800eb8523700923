//! The `Camp` record: one dated assignment of a person to a squad.
//!
//! ## Ordering Contract
//!
//! The total order is lexicographic over the 4-tuple
//! `(year, squad, shift_number, name)`. The `date` field is carried through
//! loading and output but takes no part in ordering or equality, so two
//! records that differ only in `date` compare equal.
//!
//! Every container in this crate relies on the same contract: the binary
//! search tree inserts by it, the sorts order by it, and the equality tests
//! mirror it exactly.
//!
//! ## Example
//!
//! ```
//! use roster_bench::record::Camp;
//!
//! let a = Camp::new("2021", "alpha", "Amy", "01.06.2021", "1");
//! let b = Camp::new("2022", "alpha", "Amy", "01.06.2022", "1");
//!
//! assert!(a < b); // year is the most significant field
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A single roster record.
///
/// All five fields are owned strings loaded verbatim from the input file.
/// Records are immutable after construction: containers store them by value
/// and clone whole sequences rather than share them, so no measurement can
/// observe another structure mutating its data.
#[derive(Debug, Clone, Default)]
pub struct Camp {
    /// Squad identifier within the camp
    pub squad: String,

    /// Period identifier; the primary sort and search key
    pub year: String,

    /// Person or entity name; the alternate lookup key
    pub name: String,

    /// Free-form date stamp; excluded from ordering and equality
    pub date: String,

    /// Shift identifier within the period
    pub shift_number: String,
}

impl Camp {
    /// Create a record from its fields, given in input-file order.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_bench::record::Camp;
    ///
    /// let camp = Camp::new("2021", "alpha", "Bob", "14.07.2021", "2");
    /// assert_eq!(camp.year, "2021");
    /// assert_eq!(camp.shift_number, "2");
    /// ```
    pub fn new(
        year: impl Into<String>,
        squad: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        shift_number: impl Into<String>,
    ) -> Self {
        Self {
            squad: squad.into(),
            year: year.into(),
            name: name.into(),
            date: date.into(),
            shift_number: shift_number.into(),
        }
    }
}

// Equality and ordering are hand-written rather than derived: `date` must
// stay out of both, and the field precedence differs from declaration order.

impl PartialEq for Camp {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.squad == other.squad
            && self.shift_number == other.shift_number
            && self.name == other.name
    }
}

impl Eq for Camp {}

impl Ord for Camp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.squad.cmp(&other.squad))
            .then_with(|| self.shift_number.cmp(&other.shift_number))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Camp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorted-output line format: `year squad shift_number name`.
///
/// Note that `date` is omitted, matching the fields that participate in
/// ordering.
impl fmt::Display for Camp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year, self.squad, self.shift_number, self.name
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
