//! Repository layer persisting arrays and sort history to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteArrayRepo;
