//! Sort history recording
//!
//! Builds the history payload and hands it to the repository. Failures come
//! back exactly as the repository reported them.

use crate::errors::ExResult;
use crate::model::{ArrayId, OwnerId, SortOutcome};
use crate::ops::repository::ArrayRepository;

/// Payload appended to the sort history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortHistoryRecord<'a> {
    pub owner_id: OwnerId,
    /// `None` for sorts of generated, unsaved arrays
    pub array_id: Option<ArrayId>,
    pub outcome: &'a SortOutcome,
}

/// Record `outcome` for `owner_id`, optionally against a stored array.
///
/// # Errors
///
/// Whatever `append_sort_history` returns, unchanged.
pub fn record(
    repo: &mut dyn ArrayRepository,
    owner_id: OwnerId,
    outcome: &SortOutcome,
    array_id: Option<ArrayId>,
) -> ExResult<()> {
    let record = SortHistoryRecord {
        owner_id,
        array_id,
        outcome,
    };
    tracing::debug!(
        owner_id,
        array_id,
        array_len = outcome.original.len(),
        execution_time_ms = outcome.execution_time_ms,
        "recording sort outcome"
    );
    repo.append_sort_history(&record)
}
