//! Unbalanced binary search tree over [`Camp`] records.
//!
//! ## Shape
//!
//! Insertion descends by the full record order with no rebalancing, so the
//! tree's shape is a direct function of insertion order: random input gives
//! roughly logarithmic depth, sorted input degenerates to a linked list.
//! That sensitivity is part of what the benchmark measures.
//!
//! ## Partial-Key Lookup
//!
//! [`search`](BinarySearchTree::search) takes a bare `year` string, not a
//! full record, and descends comparing `year` alone, while insertion
//! ordered by the full `(year, squad, shift_number, name)` tuple. When
//! several records share a year, the search returns whichever of them the
//! year-only walk reaches first. The hash table does the same year-only
//! work, which keeps the two structures comparable; the asymmetry is
//! intentional and pinned by tests.
//!
//! ## Example
//!
//! ```
//! use roster_bench::record::Camp;
//! use roster_bench::store::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(Camp::new("2021", "alpha", "Amy", "01.06.2021", "1"));
//! tree.insert(Camp::new("2022", "beta", "Bob", "02.07.2022", "2"));
//!
//! assert_eq!(tree.search("2022").map(|c| c.name.as_str()), Some("Bob"));
//! assert!(tree.search("1999").is_none());
//! ```

use std::cmp::Ordering;

use slab::Slab;

use crate::record::Camp;
use crate::store::node::TreeNode;

/// Unbalanced binary search tree, arena-backed.
///
/// Nodes are held in a [`Slab`] and reference each other by key. The tree
/// exposes insertion and partial-key search only: no deletion, no
/// rebalancing, no traversal.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    /// Node arena; child links are keys into this slab
    nodes: Slab<TreeNode>,

    /// Root node key, `None` for an empty tree
    root: Option<usize>,
}

impl BinarySearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create an empty tree with pre-allocated node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of records in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a record by recursive descent over the full record order.
    ///
    /// A record strictly less than the current node goes left; ties and
    /// greater records go right, so duplicates are always retained.
    pub fn insert(&mut self, record: Camp) {
        let key = self.nodes.insert(TreeNode::new(record));
        match self.root {
            None => self.root = Some(key),
            Some(root) => self.insert_below(root, key),
        }
    }

    fn insert_below(&mut self, at: usize, new_key: usize) {
        let (goes_left, child) = {
            let new_node = self.nodes.get(new_key).expect("invalid tree key");
            let at_node = self.nodes.get(at).expect("invalid tree key");
            let goes_left = new_node.record < at_node.record;
            let child = if goes_left { at_node.left } else { at_node.right };
            (goes_left, child)
        };

        match child {
            Some(next) => self.insert_below(next, new_key),
            None => {
                let at_node = self.nodes.get_mut(at).expect("invalid tree key");
                if goes_left {
                    at_node.left = Some(new_key);
                } else {
                    at_node.right = Some(new_key);
                }
            }
        }
    }

    /// Search by `year` alone.
    ///
    /// Returns the first record reached by the year-only descent, or `None`
    /// when no record carries the year. With duplicate years in the tree,
    /// which record comes back depends on insertion order; see the module
    /// docs.
    pub fn search(&self, year: &str) -> Option<&Camp> {
        self.search_below(self.root, year)
    }

    fn search_below(&self, at: Option<usize>, year: &str) -> Option<&Camp> {
        let node = self.nodes.get(at?).expect("invalid tree key");
        match year.cmp(node.record.year.as_str()) {
            Ordering::Equal => Some(&node.record),
            Ordering::Less => self.search_below(node.left, year),
            Ordering::Greater => self.search_below(node.right, year),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
