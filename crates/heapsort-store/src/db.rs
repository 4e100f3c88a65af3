//! Database connection management

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (creating if needed) the database at `path` and configure it
///
/// Missing parent directories are created.
///
/// # Errors
///
/// `Io` if the parent directory cannot be created, `Persistence` if SQLite
/// refuses the file.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("open_db", e))?;
    }
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    tracing::debug!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
///
/// `Persistence` if SQLite cannot allocate the database.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Enable foreign keys and WAL journaling
///
/// In-memory databases silently stay in `memory` journal mode.
///
/// # Errors
///
/// `Persistence` if a pragma fails.
pub fn configure(conn: &Connection) -> Result<()> {
    // journal_mode returns a row, so it can't go through execute()
    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)
}
