//! Sort command handlers.
//!
//! `sort_and_record` is the only handler that writes sort history;
//! `sort_preview` runs the same pipeline without touching a repository.

use std::time::Instant;

use heapsort_core::errors::ExResult;
use heapsort_core::model::{ArrayId, GenerateSpec, OwnerId, SortHistoryEntry, SortOutcome};
use heapsort_core::ops::{generator, recorder, sort_engine};
use heapsort_core::{log_op_end, log_op_error, log_op_start, ArrayRepository};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{domain_error, elapsed_ms};

/// What to sort
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SortSource {
    /// An array already in the repository
    Stored(ArrayId),
    /// A freshly generated array that is never saved
    Generated(GenerateSpec),
}

/// Sort an array and append the outcome to the owner's history
///
/// History entries carry the array id only for stored sources.
///
/// ## Errors
///
/// - `NotFound`: stored source the owner does not have
/// - `InvalidSize` / `InvalidRange`: bad generation request
/// - `Persistence`: the history write failed
pub fn sort_and_record(
    owner_id: OwnerId,
    source: SortSource,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
) -> ExResult<SortOutcome> {
    log_op_start!("sort_and_record", owner_id = owner_id);
    let start = Instant::now();

    let outcome = sort_and_record_impl(owner_id, source, repo, rng).map_err(|e| {
        log_op_error!("sort_and_record", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "sort_and_record",
        duration_ms = elapsed_ms(start),
        array_len = outcome.sorted.len(),
        execution_time_ms = outcome.execution_time_ms
    );
    Ok(outcome)
}

fn sort_and_record_impl(
    owner_id: OwnerId,
    source: SortSource,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
) -> ExResult<SortOutcome> {
    let op = "sort_and_record";
    let (array_id, elements) = match source {
        SortSource::Stored(array_id) => {
            let record = repo.load_array(owner_id, array_id)?;
            (Some(array_id), record.elements)
        }
        SortSource::Generated(spec) => {
            let elements = generator::generate(&spec, rng)
                .map_err(|e| domain_error(e, op, Some(owner_id), None))?;
            (None, elements)
        }
    };

    let outcome =
        sort_engine::sort(&elements).map_err(|e| domain_error(e, op, Some(owner_id), array_id))?;
    recorder::record(repo, owner_id, &outcome, array_id)?;
    Ok(outcome)
}

/// Generate and sort an array without recording anything
///
/// ## Errors
///
/// - `InvalidSize` / `InvalidRange`: bad generation request
pub fn sort_preview(spec: GenerateSpec, rng: &mut dyn RngCore) -> ExResult<SortOutcome> {
    log_op_start!("sort_preview", size = spec.size);
    let start = Instant::now();

    let outcome = generator::generate(&spec, rng)
        .and_then(|elements| sort_engine::sort(&elements))
        .map_err(|e| {
            let e = domain_error(e, "sort_preview", None, None);
            log_op_error!("sort_preview", &e, duration_ms = elapsed_ms(start));
            e
        })?;

    log_op_end!("sort_preview", duration_ms = elapsed_ms(start));
    Ok(outcome)
}

/// The owner's recorded sorts, newest first
///
/// # Errors
///
/// Repository failures only.
pub fn sort_history(
    owner_id: OwnerId,
    repo: &dyn ArrayRepository,
) -> ExResult<Vec<SortHistoryEntry>> {
    log_op_start!("sort_history", owner_id = owner_id);
    let start = Instant::now();

    let entries = repo.list_sort_history(owner_id).map_err(|e| {
        log_op_error!("sort_history", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "sort_history",
        duration_ms = elapsed_ms(start),
        count = entries.len()
    );
    Ok(entries)
}
