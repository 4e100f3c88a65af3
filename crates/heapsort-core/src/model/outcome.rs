use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::array::{ArrayId, ArraySnapshot, OwnerId};

/// Result of one heap sort run
///
/// `sorted` is an ascending permutation of `original`; `original` is the
/// input exactly as supplied or generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOutcome {
    pub original: ArraySnapshot,
    pub sorted: ArraySnapshot,
    /// Heap build and extraction time, truncated to whole milliseconds
    pub execution_time_ms: u64,
    pub sorted_at: DateTime<Utc>,
}

/// A recorded sort outcome as read back from the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortHistoryEntry {
    pub id: i64,
    pub owner_id: OwnerId,
    /// Set when the sorted array was a stored one
    pub array_id: Option<ArrayId>,
    pub original: ArraySnapshot,
    pub sorted: ArraySnapshot,
    pub execution_time_ms: u64,
    pub sorted_at: DateTime<Utc>,
}
