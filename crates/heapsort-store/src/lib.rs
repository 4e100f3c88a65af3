//! HeapSort Store - SQLite persistence for arrays and sort history
//!
//! Provides:
//! - Connection helpers (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteArrayRepo`, the durable `ArrayRepository`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use errors::Result;
pub use repo::SqliteArrayRepo;
