//! Three in-place comparison sorts over [`Camp`] slices.
//!
//! All three order by the full record order (`year`, then `squad`, then
//! `shift_number`, then `name`). They are kept deliberately textbook-shaped:
//! the benchmark compares the algorithms, not clever variants of them.

use crate::record::Camp;

/// Selection sort: O(n²) comparisons, O(n) swaps, regardless of input.
///
/// For each position, scan the unsorted remainder for its minimum and swap
/// it into place.
pub fn selection_sort(records: &mut [Camp]) {
    let n = records.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            if records[j] < records[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            records.swap(i, min_idx);
        }
    }
}

/// Insertion sort: O(n²) worst case, O(n) on already-sorted input.
///
/// Each element is held aside while strictly-greater predecessors shift one
/// slot right, then dropped into the gap. Equal elements never shift, so
/// ties keep their relative order.
pub fn insertion_sort(records: &mut [Camp]) {
    for i in 1..records.len() {
        let held = records[i].clone();
        let mut j = i;
        while j > 0 && records[j - 1] > held {
            records[j] = records[j - 1].clone();
            j -= 1;
        }
        records[j] = held;
    }
}

/// Cocktail/shaker sort: bidirectional bubble sort with early exit.
///
/// Alternates a forward pass (bubbling the maximum to the shrinking right
/// boundary) and a backward pass (bubbling the minimum to the shrinking left
/// boundary). The moment a full pass swaps nothing, the slice is sorted and
/// the function returns; already-sorted input costs a single pass.
pub fn shaker_sort(records: &mut [Camp]) {
    if records.len() < 2 {
        return;
    }
    let mut left = 0;
    let mut right = records.len() - 1;

    loop {
        let mut swapped = false;
        for i in left..right {
            if records[i] > records[i + 1] {
                records.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        right -= 1;

        swapped = false;
        for i in (left + 1..=right).rev() {
            if records[i - 1] > records[i] {
                records.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        left += 1;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
