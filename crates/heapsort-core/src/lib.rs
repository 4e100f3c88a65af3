//! HeapSort Core - array mutation and sort engine
//!
//! This crate provides the storage-independent part of the system:
//! - Array model types (snapshots, records, sort outcomes, insert/slice specs)
//! - Bounded random array generation with an injected RNG
//! - Pure positional insert and lenient slice
//! - Binary max-heap sort with execution timing
//! - The `ArrayRepository` persistence seam, an in-memory implementation of
//!   it, and the sort-history recorder that writes through it
//! - Canonical error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Used by the logging macros so callers don't need direct dependencies.
#[doc(hidden)]
pub use heapsort_core_types::schema;
#[doc(hidden)]
pub use tracing;

pub use errors::{ExError, ExErrorKind, ExResult, HeapSortError, Result};
pub use model::{
    ArrayId, ArrayRecord, ArraySnapshot, GenerateSpec, InsertPosition, InsertSpec, OwnerId,
    SliceSpec, SortHistoryEntry, SortOutcome,
};
pub use ops::{ArrayRepository, MemoryStore};
