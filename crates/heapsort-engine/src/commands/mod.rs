//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Engine functions own lifecycle logging: `log_op_start!` at entry, then
//! exactly one of `log_op_end!` / `log_op_error!`. Lower layers only emit
//! `tracing::debug!`.

pub mod array;
pub mod engine_command;
pub mod sort;

use heapsort_core::errors::{ExError, HeapSortError};
use heapsort_core::model::{ArrayId, OwnerId};

/// Lift a domain error into an `ExError` carrying the operation context
pub(crate) fn domain_error(
    err: HeapSortError,
    op: &str,
    owner_id: Option<OwnerId>,
    array_id: Option<ArrayId>,
) -> ExError {
    let mut ex = ExError::from(err).with_op(op);
    if let Some(owner_id) = owner_id {
        ex = ex.with_owner_id(owner_id);
    }
    if let Some(array_id) = array_id {
        ex = ex.with_array_id(array_id);
    }
    ex
}

pub(crate) fn elapsed_ms(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
