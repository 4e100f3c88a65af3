use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Identity handle assigned by the persistence layer
pub type ArrayId = i64;

/// Caller identity that owns arrays and sort history
pub type OwnerId = i64;

/// An ordered sequence of integers passed by value between operations
///
/// Operations never mutate a snapshot they were given; they build a new one.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArraySnapshot(Vec<i32>);

impl ArraySnapshot {
    pub fn new(elements: Vec<i32>) -> Self {
        Self(elements)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for ArraySnapshot {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for ArraySnapshot {
    fn from(elements: Vec<i32>) -> Self {
        Self(elements)
    }
}

impl From<&[i32]> for ArraySnapshot {
    fn from(elements: &[i32]) -> Self {
        Self(elements.to_vec())
    }
}

impl FromIterator<i32> for ArraySnapshot {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ArraySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

/// A persisted array owned by one caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayRecord {
    pub id: ArrayId,
    pub owner_id: OwnerId,
    pub elements: ArraySnapshot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
