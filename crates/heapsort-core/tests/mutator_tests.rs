#![allow(clippy::unwrap_used, clippy::expect_used)]

use heapsort_core::errors::HeapSortError;
use heapsort_core::model::{InsertSpec, SliceSpec};
use heapsort_core::ops::mutator::{insert, insert_after, insert_end, insert_start, slice};
use proptest::prelude::*;

#[test]
fn test_insert_after_middle() {
    let out = insert_after(&[1, 2, 3], 9, 1).unwrap();
    assert_eq!(out.as_slice(), &[1, 2, 9, 3]);
}

#[test]
fn test_insert_after_out_of_range() {
    let err = insert_after(&[1, 2, 3], 9, 5).unwrap_err();
    assert_eq!(err, HeapSortError::IndexOutOfRange { index: 5, len: 3 });
}

#[test]
fn test_insert_after_index_equal_to_len_fails() {
    assert!(matches!(
        insert_after(&[1, 2, 3], 9, 3),
        Err(HeapSortError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_insert_from_untyped_tag() {
    let spec = InsertSpec::parse(4, "After", Some(0)).unwrap();
    assert_eq!(insert(&[1, 2], &spec).unwrap().as_slice(), &[1, 4, 2]);
}

#[test]
fn test_insert_unknown_tag_fails() {
    let err = InsertSpec::parse(4, "before", None).unwrap_err();
    assert!(matches!(err, HeapSortError::InvalidPosition { position } if position == "before"));
}

#[test]
fn test_insert_leaves_input_untouched() {
    let input = vec![1, 2, 3];
    let _ = insert_start(&input, 0);
    let _ = insert_end(&input, 4);
    assert_eq!(input, vec![1, 2, 3]);
}

// Bad slice bounds are clamped, never reported as errors.

#[test]
fn test_slice_negative_start_is_clamped() {
    let out = slice(&[1, 2, 3, 4, 5], &SliceSpec::new(Some(-3), Some(2)));
    assert_eq!(out.as_slice(), &[1, 2]);
}

#[test]
fn test_slice_crossed_bounds_is_empty() {
    let out = slice(&[1, 2, 3], &SliceSpec::new(Some(5), Some(1)));
    assert!(out.is_empty());
}

#[test]
fn test_slice_end_past_len_is_clamped() {
    let out = slice(&[1, 2, 3], &SliceSpec::new(Some(1), Some(100)));
    assert_eq!(out.as_slice(), &[2, 3]);
}

#[test]
fn test_slice_start_equal_end_is_empty() {
    let out = slice(&[1, 2, 3], &SliceSpec::new(Some(2), Some(2)));
    assert!(out.is_empty());
}

#[test]
fn test_slice_start_past_len_without_end_is_empty() {
    let out = slice(&[1, 2, 3], &SliceSpec::new(Some(10), None));
    assert!(out.is_empty());
}

#[test]
fn test_slice_of_empty_array() {
    assert!(slice(&[], &SliceSpec::default()).is_empty());
}

proptest! {
    #[test]
    fn prop_insert_end_appends(input in prop::collection::vec(any::<i32>(), 0..50), v in any::<i32>()) {
        let out = insert_end(&input, v);
        prop_assert_eq!(out.len(), input.len() + 1);
        prop_assert_eq!(out.last(), Some(&v));
        prop_assert_eq!(&out[..input.len()], &input[..]);
    }

    #[test]
    fn prop_insert_start_prepends(input in prop::collection::vec(any::<i32>(), 0..50), v in any::<i32>()) {
        let out = insert_start(&input, v);
        prop_assert_eq!(out.len(), input.len() + 1);
        prop_assert_eq!(out.first(), Some(&v));
        prop_assert_eq!(&out[1..], &input[..]);
    }

    #[test]
    fn prop_slice_never_panics(
        input in prop::collection::vec(any::<i32>(), 0..30),
        start in prop::option::of(-40i64..40),
        end in prop::option::of(-40i64..40),
    ) {
        let out = slice(&input, &SliceSpec::new(start, end));
        prop_assert!(out.len() <= input.len());
    }
}
