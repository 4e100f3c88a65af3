//! HeapSort Engine - Orchestration layer
//!
//! Composes the pure core operations with an `ArrayRepository`: load,
//! mutate or sort, then save or record. Works against any repository
//! implementation, in-memory or SQLite.

pub mod commands;
