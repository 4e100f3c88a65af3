//! Pure array transformations
//!
//! Every function here reads its input and returns a new snapshot; the
//! caller's sequence is never modified.

use crate::errors::{HeapSortError, Result};
use crate::model::{ArraySnapshot, InsertPosition, InsertSpec, SliceSpec};

/// Prepend `value`
pub fn insert_start(arr: &[i32], value: i32) -> ArraySnapshot {
    let mut out = Vec::with_capacity(arr.len() + 1);
    out.push(value);
    out.extend_from_slice(arr);
    out.into()
}

/// Append `value`
pub fn insert_end(arr: &[i32], value: i32) -> ArraySnapshot {
    let mut out = Vec::with_capacity(arr.len() + 1);
    out.extend_from_slice(arr);
    out.push(value);
    out.into()
}

/// Place `value` immediately after position `index`
///
/// # Errors
///
/// `IndexOutOfRange` unless `0 <= index < arr.len()`.
pub fn insert_after(arr: &[i32], value: i32, index: i64) -> Result<ArraySnapshot> {
    let at = usize::try_from(index)
        .ok()
        .filter(|&i| i < arr.len())
        .ok_or(HeapSortError::IndexOutOfRange {
            index,
            len: arr.len(),
        })?;

    let mut out = Vec::with_capacity(arr.len() + 1);
    out.extend_from_slice(&arr[..=at]);
    out.push(value);
    out.extend_from_slice(&arr[at + 1..]);
    Ok(out.into())
}

/// Apply an [`InsertSpec`]
///
/// # Errors
///
/// - `MissingIndex` for `after` without an index
/// - `IndexOutOfRange` for `after` with a bad index
pub fn insert(arr: &[i32], spec: &InsertSpec) -> Result<ArraySnapshot> {
    match spec.position {
        InsertPosition::Start => Ok(insert_start(arr, spec.value)),
        InsertPosition::End => Ok(insert_end(arr, spec.value)),
        InsertPosition::After => {
            let index = spec.index.ok_or(HeapSortError::MissingIndex)?;
            insert_after(arr, spec.value, index)
        }
    }
}

/// Copy out `[start, end)`, clamping instead of failing.
///
/// `start` below zero becomes 0, `end` past the length becomes the length,
/// and bounds that cross after clamping yield an empty snapshot.
pub fn slice(arr: &[i32], spec: &SliceSpec) -> ArraySnapshot {
    let len = arr.len() as i64;
    let start = spec.start.unwrap_or(0).max(0);
    let end = spec.end.unwrap_or(len).min(len);

    if start > end {
        return ArraySnapshot::default();
    }

    // 0 <= start <= end <= len here
    ArraySnapshot::from(&arr[start as usize..end as usize])
}
