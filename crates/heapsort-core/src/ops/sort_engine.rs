//! Binary max-heap sort
//!
//! The heap invariant is `v[parent] >= v[child]`. Comparisons are strict
//! greater-than, so equal elements are never swapped with each other; the
//! sort is not stable, which matters only if elements carry payloads.

use chrono::Utc;
use std::time::Instant;

use crate::errors::{HeapSortError, Result};
use crate::model::{ArraySnapshot, SortOutcome};

/// Restore the heap invariant for the subtree rooted at `node`, treating
/// `v` as the whole active heap.
fn sift_down<T: Ord>(v: &mut [T], mut node: usize) {
    let n = v.len();
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < n && v[left] > v[largest] {
            largest = left;
        }
        if right < n && v[right] > v[largest] {
            largest = right;
        }

        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}

/// Sort `v` ascending in place.
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    let n = v.len();

    for i in (0..n / 2).rev() {
        sift_down(v, i);
    }

    // Move the current maximum behind the shrinking heap.
    for i in (1..n).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0);
    }
}

/// Heap sort a copy of `arr`, timing only the sort itself.
///
/// # Errors
///
/// `EmptyInput` if `arr` has no elements.
pub fn sort(arr: &[i32]) -> Result<SortOutcome> {
    if arr.is_empty() {
        return Err(HeapSortError::EmptyInput);
    }

    let original = ArraySnapshot::from(arr);
    let mut working = arr.to_vec();

    let started = Instant::now();
    heap_sort(&mut working);
    let elapsed = started.elapsed();

    Ok(SortOutcome {
        original,
        sorted: working.into(),
        execution_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        sorted_at: Utc::now(),
    })
}
