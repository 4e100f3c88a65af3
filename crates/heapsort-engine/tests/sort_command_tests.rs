// Integration tests for sort command handlers.

use heapsort_core::errors::ExErrorKind;
use heapsort_core::model::{ArraySnapshot, GenerateSpec};
use heapsort_core::{ArrayRepository, MemoryStore};
use heapsort_engine::commands::array::{create_array, delete_array, ArraySource};
use heapsort_engine::commands::sort::{sort_and_record, sort_history, sort_preview, SortSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(11)
}

#[test]
fn test_sort_stored_array_records_with_id() {
    let mut store = MemoryStore::new();
    let rec = create_array(
        1,
        ArraySource::Elements(ArraySnapshot::from(&[5, 3, 8, 1, 9, 2][..])),
        &mut store,
        &mut rng(),
    )
    .unwrap();

    let outcome = sort_and_record(1, SortSource::Stored(rec.id), &mut store, &mut rng()).unwrap();

    assert_eq!(outcome.original, rec.elements);
    assert_eq!(outcome.sorted.as_slice(), &[1, 2, 3, 5, 8, 9]);

    let history = sort_history(1, &store).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].array_id, Some(rec.id));
    assert_eq!(history[0].sorted, outcome.sorted);
}

#[test]
fn test_sort_does_not_modify_stored_array() {
    let mut store = MemoryStore::new();
    let rec = create_array(
        1,
        ArraySource::Elements(vec![3, 2, 1].into()),
        &mut store,
        &mut rng(),
    )
    .unwrap();

    sort_and_record(1, SortSource::Stored(rec.id), &mut store, &mut rng()).unwrap();

    assert_eq!(
        store.load_array(1, rec.id).unwrap().elements.as_slice(),
        &[3, 2, 1]
    );
}

#[test]
fn test_sort_generated_records_without_id() {
    let mut store = MemoryStore::new();
    let spec = GenerateSpec::new(100);

    let outcome =
        sort_and_record(1, SortSource::Generated(spec), &mut store, &mut rng()).unwrap();

    assert_eq!(outcome.sorted.len(), 100);
    assert!(outcome.sorted.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(store.array_count(), 0);
    assert_eq!(sort_history(1, &store).unwrap()[0].array_id, None);
}

#[test]
fn test_sort_missing_array_records_nothing() {
    let mut store = MemoryStore::new();
    let err = sort_and_record(1, SortSource::Stored(42), &mut store, &mut rng()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert!(sort_history(1, &store).unwrap().is_empty());
}

#[test]
fn test_sort_generated_invalid_size() {
    let mut store = MemoryStore::new();
    let err = sort_and_record(
        1,
        SortSource::Generated(GenerateSpec::new(0)),
        &mut store,
        &mut rng(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidSize);
    assert_eq!(err.op(), Some("sort_and_record"));
}

#[test]
fn test_preview_is_deterministic_and_unrecorded() {
    let spec = GenerateSpec::new(30).with_range(-100, 100);
    let a = sort_preview(spec, &mut rng()).unwrap();
    let b = sort_preview(spec, &mut rng()).unwrap();

    assert_eq!(a.original, b.original);
    assert_eq!(a.sorted, b.sorted);
    assert!(a.sorted.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_preview_inverted_range() {
    let err = sort_preview(GenerateSpec::new(5).with_range(3, 2), &mut rng()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidRange);
}

#[test]
fn test_history_newest_first_and_dropped_with_array() {
    let mut store = MemoryStore::new();
    let rec = create_array(
        1,
        ArraySource::Elements(vec![2, 1].into()),
        &mut store,
        &mut rng(),
    )
    .unwrap();

    sort_and_record(1, SortSource::Stored(rec.id), &mut store, &mut rng()).unwrap();
    sort_and_record(
        1,
        SortSource::Generated(GenerateSpec::new(3)),
        &mut store,
        &mut rng(),
    )
    .unwrap();

    let history = sort_history(1, &store).unwrap();
    assert_eq!(history[0].array_id, None);
    assert_eq!(history[1].array_id, Some(rec.id));

    delete_array(1, rec.id, &mut store).unwrap();
    assert_eq!(sort_history(1, &store).unwrap().len(), 1);
}
