use crate::errors::ExResult;
use crate::model::{ArrayId, ArrayRecord, ArraySnapshot, OwnerId, SortHistoryEntry};
use crate::ops::recorder::SortHistoryRecord;

/// Persistence collaborator for arrays and sort history
///
/// Array identities are scoped by owner: an array that exists but belongs
/// to someone else is reported as `NotFound`. Implementations decide their
/// own write semantics; the engine adds no locking around load-mutate-save.
pub trait ArrayRepository {
    /// # Errors
    ///
    /// `NotFound` if the owner has no array with this id.
    fn load_array(&self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<ArrayRecord>;

    /// Replace the elements of an existing array, returning the updated record
    ///
    /// # Errors
    ///
    /// `NotFound` if the owner has no array with this id.
    fn save_array(
        &mut self,
        owner_id: OwnerId,
        array_id: ArrayId,
        elements: &ArraySnapshot,
    ) -> ExResult<ArrayRecord>;

    /// # Errors
    ///
    /// Storage failures only.
    fn create_array(&mut self, owner_id: OwnerId, elements: &ArraySnapshot)
        -> ExResult<ArrayRecord>;

    /// All arrays of an owner, newest first
    ///
    /// # Errors
    ///
    /// Storage failures only.
    fn list_arrays(&self, owner_id: OwnerId) -> ExResult<Vec<ArrayRecord>>;

    /// Remove an array together with the history recorded against it
    ///
    /// # Errors
    ///
    /// `NotFound` if the owner has no array with this id.
    fn delete_array(&mut self, owner_id: OwnerId, array_id: ArrayId) -> ExResult<()>;

    /// # Errors
    ///
    /// Storage failures only.
    fn append_sort_history(&mut self, record: &SortHistoryRecord<'_>) -> ExResult<()>;

    /// All recorded sorts of an owner, newest first
    ///
    /// # Errors
    ///
    /// Storage failures only.
    fn list_sort_history(&self, owner_id: OwnerId) -> ExResult<Vec<SortHistoryEntry>>;
}

