#![allow(clippy::unwrap_used, clippy::expect_used)]

use heapsort_core::errors::{ExError, ExErrorKind, ExResult};
use heapsort_core::model::{ArrayId, ArrayRecord, ArraySnapshot, OwnerId, SortHistoryEntry};
use heapsort_core::ops::recorder::{record, SortHistoryRecord};
use heapsort_core::ops::sort_engine::sort;
use heapsort_core::{ArrayRepository, MemoryStore};

/// Repository whose history writes always fail
struct BrokenHistory(MemoryStore);

impl ArrayRepository for BrokenHistory {
    fn load_array(&self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<ArrayRecord> {
        self.0.load_array(owner_id, array_id)
    }
    fn save_array(
        &mut self,
        owner_id: OwnerId,
        array_id: ArrayId,
        elements: &ArraySnapshot,
    ) -> ExResult<ArrayRecord> {
        self.0.save_array(owner_id, array_id, elements)
    }
    fn create_array(
        &mut self,
        owner_id: OwnerId,
        elements: &ArraySnapshot,
    ) -> ExResult<ArrayRecord> {
        self.0.create_array(owner_id, elements)
    }
    fn list_arrays(&self, owner_id: OwnerId) -> ExResult<Vec<ArrayRecord>> {
        self.0.list_arrays(owner_id)
    }
    fn delete_array(&mut self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<()> {
        self.0.delete_array(owner_id, array_id)
    }
    fn append_sort_history(&mut self, _record: &SortHistoryRecord<'_>) -> ExResult<()> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("append_sort_history")
            .with_message("disk full"))
    }
    fn list_sort_history(&self, owner_id: OwnerId) -> ExResult<Vec<SortHistoryEntry>> {
        self.0.list_sort_history(owner_id)
    }
}

#[test]
fn test_record_with_array_id() {
    let mut store = MemoryStore::new();
    let arr = store.create_array(1, &vec![3, 1, 2].into()).unwrap();
    let outcome = sort(&arr.elements).unwrap();

    record(&mut store, 1, &outcome, Some(arr.id)).unwrap();

    let history = store.list_sort_history(1).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].array_id, Some(arr.id));
    assert_eq!(history[0].original, outcome.original);
    assert_eq!(history[0].sorted.as_slice(), &[1, 2, 3]);
    assert_eq!(history[0].execution_time_ms, outcome.execution_time_ms);
}

#[test]
fn test_record_without_array_id() {
    let mut store = MemoryStore::new();
    let outcome = sort(&[2, 1]).unwrap();

    record(&mut store, 5, &outcome, None).unwrap();

    let history = store.list_sort_history(5).unwrap();
    assert_eq!(history[0].array_id, None);
    assert!(store.list_sort_history(1).unwrap().is_empty());
}

#[test]
fn test_record_propagates_repository_failure_unchanged() {
    let mut repo = BrokenHistory(MemoryStore::new());
    let outcome = sort(&[1]).unwrap();

    let err = record(&mut repo, 1, &outcome, None).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.op(), Some("append_sort_history"));
    assert_eq!(err.message(), "disk full");
}

#[test]
fn test_deleting_array_drops_its_history() {
    let mut store = MemoryStore::new();
    let arr = store.create_array(1, &vec![2, 1].into()).unwrap();
    let outcome = sort(&arr.elements).unwrap();
    record(&mut store, 1, &outcome, Some(arr.id)).unwrap();
    record(&mut store, 1, &outcome, None).unwrap();

    store.delete_array(1, arr.id).unwrap();

    let history = store.list_sort_history(1).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].array_id, None);
}
