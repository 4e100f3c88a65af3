use chrono::Utc;
use std::collections::BTreeMap;

use crate::errors::{ExError, ExResult, HeapSortError};
use crate::model::{ArrayId, ArrayRecord, ArraySnapshot, OwnerId, SortHistoryEntry};
use crate::ops::recorder::SortHistoryRecord;
use crate::ops::repository::ArrayRepository;

/// In-memory `ArrayRepository`
///
/// BTreeMap-backed with sequential ids starting at 1. Not thread-safe;
/// wrap it yourself if it has to be shared. Used by tests and by callers
/// that don't need durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    arrays: BTreeMap<ArrayId, ArrayRecord>,
    history: Vec<SortHistoryEntry>,
    next_array_id: ArrayId,
    next_history_id: i64,
}

fn not_found(op: &str, owner_id: OwnerId, array_id: ArrayId) -> ExError {
    ExError::from(HeapSortError::ArrayNotFound { array_id })
        .with_op(op)
        .with_owner_id(owner_id)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored arrays across all owners
    pub fn array_count(&self) -> usize {
        self.arrays.len()
    }

    fn owned_mut(
        &mut self,
        op: &str,
        owner_id: OwnerId,
        array_id: ArrayId,
    ) -> ExResult<&mut ArrayRecord> {
        self.arrays
            .get_mut(&array_id)
            .filter(|r| r.owner_id == owner_id)
            .ok_or_else(|| not_found(op, owner_id, array_id))
    }
}

impl ArrayRepository for MemoryStore {
    fn load_array(&self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<ArrayRecord> {
        self.arrays
            .get(&array_id)
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .ok_or_else(|| not_found("load_array", owner_id, array_id))
    }

    fn save_array(
        &mut self,
        owner_id: OwnerId,
        array_id: ArrayId,
        elements: &ArraySnapshot,
    ) -> ExResult<ArrayRecord> {
        let record = self.owned_mut("save_array", owner_id, array_id)?;
        record.elements = elements.clone();
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn create_array(
        &mut self,
        owner_id: OwnerId,
        elements: &ArraySnapshot,
    ) -> ExResult<ArrayRecord> {
        self.next_array_id += 1;
        let now = Utc::now();
        let record = ArrayRecord {
            id: self.next_array_id,
            owner_id,
            elements: elements.clone(),
            created_at: now,
            updated_at: now,
        };
        self.arrays.insert(record.id, record.clone());
        Ok(record)
    }

    fn list_arrays(&self, owner_id: OwnerId) -> ExResult<Vec<ArrayRecord>> {
        // ids are assigned in creation order
        Ok(self
            .arrays
            .values()
            .rev()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn delete_array(&mut self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<()> {
        self.owned_mut("delete_array", owner_id, array_id)?;
        self.arrays.remove(&array_id);
        self.history.retain(|h| h.array_id != Some(array_id));
        Ok(())
    }

    fn append_sort_history(&mut self, record: &SortHistoryRecord<'_>) -> ExResult<()> {
        self.next_history_id += 1;
        self.history.push(SortHistoryEntry {
            id: self.next_history_id,
            owner_id: record.owner_id,
            array_id: record.array_id,
            original: record.outcome.original.clone(),
            sorted: record.outcome.sorted.clone(),
            execution_time_ms: record.outcome.execution_time_ms,
            sorted_at: record.outcome.sorted_at,
        });
        Ok(())
    }

    fn list_sort_history(&self, owner_id: OwnerId) -> ExResult<Vec<SortHistoryEntry>> {
        Ok(self
            .history
            .iter()
            .rev()
            .filter(|h| h.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.create_array(1, &vec![1].into()).unwrap();
        let b = store.create_array(1, &vec![2].into()).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.array_count(), 2);
    }

    #[test]
    fn test_other_owner_sees_not_found() {
        let mut store = MemoryStore::new();
        let rec = store.create_array(1, &vec![1, 2].into()).unwrap();

        let err = store.load_array(2, rec.id).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.owner_id(), Some(2));
        assert_eq!(err.array_id(), Some(rec.id));
    }

    #[test]
    fn test_list_is_newest_first_and_owner_scoped() {
        let mut store = MemoryStore::new();
        store.create_array(1, &vec![1].into()).unwrap();
        store.create_array(2, &vec![2].into()).unwrap();
        store.create_array(1, &vec![3].into()).unwrap();

        let ids: Vec<_> = store.list_arrays(1).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
