//! SQLite implementation of `ArrayRepository`
//!
//! Element lists are stored as JSON text and timestamps as Unix millis.
//! Every lookup is filtered by owner, so another owner's array reads as
//! missing.

use chrono::{DateTime, Utc};
use heapsort_core::errors::{ExError, HeapSortError};
use heapsort_core::model::{ArrayId, ArrayRecord, ArraySnapshot, OwnerId, SortHistoryEntry};
use heapsort_core::ops::recorder::SortHistoryRecord;
use heapsort_core::ArrayRepository;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::errors::{corrupt_column, corrupt_value, from_rusqlite, Result};

/// `ArrayRepository` over a borrowed SQLite connection
///
/// The connection is expected to have had migrations applied.
pub struct SqliteArrayRepo<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteArrayRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

/// Raw `arrays` row before the JSON column is decoded
struct ArrayRow {
    id: ArrayId,
    owner_id: OwnerId,
    elements: String,
    created_at: i64,
    updated_at: i64,
}

impl ArrayRow {
    const COLUMNS: &'static str = "id, owner_id, elements, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            elements: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn decode(self, op: &str) -> Result<ArrayRecord> {
        Ok(ArrayRecord {
            id: self.id,
            owner_id: self.owner_id,
            elements: decode_snapshot(op, "elements", &self.elements)?,
            created_at: from_millis(op, "created_at", self.created_at)?,
            updated_at: from_millis(op, "updated_at", self.updated_at)?,
        })
    }
}

struct HistoryRow {
    id: i64,
    owner_id: OwnerId,
    array_id: Option<ArrayId>,
    original: String,
    sorted: String,
    execution_time_ms: i64,
    sorted_at: i64,
}

impl HistoryRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            array_id: row.get(2)?,
            original: row.get(3)?,
            sorted: row.get(4)?,
            execution_time_ms: row.get(5)?,
            sorted_at: row.get(6)?,
        })
    }

    fn decode(self) -> Result<SortHistoryEntry> {
        let op = "list_sort_history";
        Ok(SortHistoryEntry {
            id: self.id,
            owner_id: self.owner_id,
            array_id: self.array_id,
            original: decode_snapshot(op, "original", &self.original)?,
            sorted: decode_snapshot(op, "sorted", &self.sorted)?,
            execution_time_ms: u64::try_from(self.execution_time_ms)
                .map_err(|_| corrupt_value(op, "execution_time_ms", self.execution_time_ms))?,
            sorted_at: from_millis(op, "sorted_at", self.sorted_at)?,
        })
    }
}

fn decode_snapshot(op: &str, column: &str, json: &str) -> Result<ArraySnapshot> {
    serde_json::from_str(json).map_err(|e| corrupt_column(op, column, e))
}

fn encode_snapshot(snapshot: &ArraySnapshot) -> Result<String> {
    serde_json::to_string(snapshot).map_err(|e| ExError::from(HeapSortError::from(e)))
}

fn from_millis(op: &str, column: &str, ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| corrupt_value(op, column, ms))
}

fn not_found(op: &str, owner_id: OwnerId, array_id: ArrayId) -> ExError {
    ExError::from(HeapSortError::ArrayNotFound { array_id })
        .with_op(op)
        .with_owner_id(owner_id)
}

impl SqliteArrayRepo<'_> {
    fn find_array(&self, op: &str, owner_id: OwnerId, array_id: ArrayId) -> Result<ArrayRecord> {
        let sql = format!(
            "SELECT {} FROM arrays WHERE id = ?1 AND owner_id = ?2",
            ArrayRow::COLUMNS
        );
        self.conn
            .query_row(&sql, [array_id, owner_id], ArrayRow::from_row)
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| not_found(op, owner_id, array_id))?
            .decode(op)
    }
}

impl ArrayRepository for SqliteArrayRepo<'_> {
    fn load_array(&self, owner_id: OwnerId, array_id: ArrayId) -> Result<ArrayRecord> {
        self.find_array("load_array", owner_id, array_id)
    }

    fn save_array(
        &mut self,
        owner_id: OwnerId,
        array_id: ArrayId,
        elements: &ArraySnapshot,
    ) -> Result<ArrayRecord> {
        let changed = self
            .conn
            .execute(
                "UPDATE arrays SET elements = ?1, updated_at = ?2
                 WHERE id = ?3 AND owner_id = ?4",
                rusqlite::params![
                    encode_snapshot(elements)?,
                    Utc::now().timestamp_millis(),
                    array_id,
                    owner_id,
                ],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(not_found("save_array", owner_id, array_id));
        }
        self.find_array("save_array", owner_id, array_id)
    }

    fn create_array(&mut self, owner_id: OwnerId, elements: &ArraySnapshot) -> Result<ArrayRecord> {
        let now = Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO arrays (owner_id, elements, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)",
                rusqlite::params![owner_id, encode_snapshot(elements)?, now],
            )
            .map_err(from_rusqlite)?;

        let id = self.conn.last_insert_rowid();
        let created_at = from_millis("create_array", "created_at", now)?;
        Ok(ArrayRecord {
            id,
            owner_id,
            elements: elements.clone(),
            created_at,
            updated_at: created_at,
        })
    }

    fn list_arrays(&self, owner_id: OwnerId) -> Result<Vec<ArrayRecord>> {
        let sql = format!(
            "SELECT {} FROM arrays WHERE owner_id = ?1 ORDER BY id DESC",
            ArrayRow::COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([owner_id], ArrayRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(|r| r.decode("list_arrays")).collect()
    }

    fn delete_array(&mut self, owner_id: OwnerId, array_id: ArrayId) -> Result<()> {
        let tx = self.conn.unchecked_transaction().map_err(from_rusqlite)?;

        // history rows reference the array, so they go first
        tx.execute(
            "DELETE FROM sort_history WHERE array_id = ?1 AND owner_id = ?2",
            [array_id, owner_id],
        )
        .map_err(from_rusqlite)?;
        let removed = tx
            .execute(
                "DELETE FROM arrays WHERE id = ?1 AND owner_id = ?2",
                [array_id, owner_id],
            )
            .map_err(from_rusqlite)?;

        if removed == 0 {
            // dropping the transaction rolls it back
            return Err(not_found("delete_array", owner_id, array_id));
        }
        tx.commit().map_err(from_rusqlite)
    }

    fn append_sort_history(&mut self, record: &SortHistoryRecord<'_>) -> Result<()> {
        let outcome = record.outcome;
        self.conn
            .execute(
                "INSERT INTO sort_history
                    (owner_id, array_id, original, sorted, execution_time_ms, sorted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    record.owner_id,
                    record.array_id,
                    encode_snapshot(&outcome.original)?,
                    encode_snapshot(&outcome.sorted)?,
                    i64::try_from(outcome.execution_time_ms).unwrap_or(i64::MAX),
                    outcome.sorted_at.timestamp_millis(),
                ],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    fn list_sort_history(&self, owner_id: OwnerId) -> Result<Vec<SortHistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, owner_id, array_id, original, sorted, execution_time_ms, sorted_at
                 FROM sort_history WHERE owner_id = ?1 ORDER BY id DESC",
            )
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([owner_id], HistoryRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(HistoryRow::decode).collect()
    }
}
