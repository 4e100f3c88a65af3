//! Array command handlers with boundary logging.
//!
//! Each handler is load, apply a core operation, save. There is no locking
//! around that sequence; the repository's own write semantics apply.

use std::time::Instant;

use heapsort_core::errors::{ExResult, HeapSortError};
use heapsort_core::model::{
    ArrayId, ArrayRecord, ArraySnapshot, GenerateSpec, InsertSpec, OwnerId, SliceSpec,
};
use heapsort_core::ops::{generator, mutator};
use heapsort_core::{log_op_end, log_op_error, log_op_start, ArrayRepository};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{domain_error, elapsed_ms};

/// Where the elements of a new array come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArraySource {
    /// Store exactly these elements
    Elements(ArraySnapshot),
    /// Draw the elements from the RNG
    Generate(GenerateSpec),
}

impl ArraySource {
    /// Pick a source from optional request fields
    ///
    /// Non-empty `elements` win; otherwise a positive `size` generates with
    /// `min`/`max` defaulting to `[1, 1000]`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if neither is usable.
    pub fn from_parts(
        elements: Option<Vec<i32>>,
        size: Option<i64>,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Result<Self, HeapSortError> {
        match (elements, size) {
            (Some(elements), _) if !elements.is_empty() => {
                Ok(ArraySource::Elements(elements.into()))
            }
            (_, Some(size)) if size > 0 => Ok(ArraySource::Generate(GenerateSpec::from_options(
                size, min, max,
            ))),
            _ => Err(HeapSortError::InvalidInput {
                reason: "either elements or size must be provided".to_string(),
            }),
        }
    }
}

/// Create an array from explicit elements or a generation request
///
/// ## Errors
///
/// - `InvalidSize`: length outside `[1, 10000]`
/// - `InvalidRange`: generation bounds inverted
/// - `Persistence`: repository failure
pub fn create_array(
    owner_id: OwnerId,
    source: ArraySource,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
) -> ExResult<ArrayRecord> {
    log_op_start!("create_array", owner_id = owner_id);
    let start = Instant::now();

    let record = create_array_impl(owner_id, source, repo, rng).map_err(|e| {
        log_op_error!("create_array", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "create_array",
        duration_ms = elapsed_ms(start),
        array_id = record.id,
        array_len = record.elements.len()
    );
    Ok(record)
}

fn create_array_impl(
    owner_id: OwnerId,
    source: ArraySource,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
) -> ExResult<ArrayRecord> {
    let op = "create_array";
    let elements = match source {
        ArraySource::Elements(elements) => {
            generator::validate_size(elements.len() as i64)
                .map_err(|e| domain_error(e, op, Some(owner_id), None))?;
            elements
        }
        ArraySource::Generate(spec) => generator::generate(&spec, rng)
            .map_err(|e| domain_error(e, op, Some(owner_id), None))?,
    };
    repo.create_array(owner_id, &elements)
}

/// # Errors
///
/// `NotFound` if the owner has no such array.
pub fn get_array(
    owner_id: OwnerId,
    array_id: ArrayId,
    repo: &dyn ArrayRepository,
) -> ExResult<ArrayRecord> {
    log_op_start!("get_array", owner_id = owner_id, array_id = array_id);
    let start = Instant::now();

    let record = repo.load_array(owner_id, array_id).map_err(|e| {
        log_op_error!("get_array", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("get_array", duration_ms = elapsed_ms(start));
    Ok(record)
}

/// All of the owner's arrays, newest first
///
/// # Errors
///
/// Repository failures only.
pub fn list_arrays(owner_id: OwnerId, repo: &dyn ArrayRepository) -> ExResult<Vec<ArrayRecord>> {
    log_op_start!("list_arrays", owner_id = owner_id);
    let start = Instant::now();

    let records = repo.list_arrays(owner_id).map_err(|e| {
        log_op_error!("list_arrays", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "list_arrays",
        duration_ms = elapsed_ms(start),
        count = records.len()
    );
    Ok(records)
}

/// Replace an array's elements wholesale
///
/// ## Errors
///
/// - `EmptyInput`: `elements` is empty
/// - `InvalidSize`: more than 10000 elements
/// - `NotFound`: the owner has no such array
pub fn update_array(
    owner_id: OwnerId,
    array_id: ArrayId,
    elements: ArraySnapshot,
    repo: &mut dyn ArrayRepository,
) -> ExResult<ArrayRecord> {
    log_op_start!("update_array", owner_id = owner_id, array_id = array_id);
    let start = Instant::now();

    let record = update_array_impl(owner_id, array_id, elements, repo).map_err(|e| {
        log_op_error!("update_array", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "update_array",
        duration_ms = elapsed_ms(start),
        array_len = record.elements.len()
    );
    Ok(record)
}

fn update_array_impl(
    owner_id: OwnerId,
    array_id: ArrayId,
    elements: ArraySnapshot,
    repo: &mut dyn ArrayRepository,
) -> ExResult<ArrayRecord> {
    check_storable(&elements)
        .map_err(|e| domain_error(e, "update_array", Some(owner_id), Some(array_id)))?;
    repo.save_array(owner_id, array_id, &elements)
}

/// Delete an array and the sort history recorded against it
///
/// # Errors
///
/// `NotFound` if the owner has no such array.
pub fn delete_array(
    owner_id: OwnerId,
    array_id: ArrayId,
    repo: &mut dyn ArrayRepository,
) -> ExResult<()> {
    log_op_start!("delete_array", owner_id = owner_id, array_id = array_id);
    let start = Instant::now();

    repo.delete_array(owner_id, array_id).map_err(|e| {
        log_op_error!("delete_array", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("delete_array", duration_ms = elapsed_ms(start));
    Ok(())
}

/// Insert one element into a stored array and save the result
///
/// ## Errors
///
/// - `NotFound`: the owner has no such array
/// - `MissingIndex` / `IndexOutOfRange`: bad `after` insert
/// - `InvalidSize`: the array is already at the 10000 element limit
pub fn add_element(
    owner_id: OwnerId,
    array_id: ArrayId,
    insert: InsertSpec,
    repo: &mut dyn ArrayRepository,
) -> ExResult<ArrayRecord> {
    log_op_start!(
        "add_element",
        owner_id = owner_id,
        array_id = array_id,
        position = insert.position.as_str()
    );
    let start = Instant::now();

    let record = add_element_impl(owner_id, array_id, &insert, repo).map_err(|e| {
        log_op_error!("add_element", &e, duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "add_element",
        duration_ms = elapsed_ms(start),
        array_len = record.elements.len()
    );
    Ok(record)
}

fn add_element_impl(
    owner_id: OwnerId,
    array_id: ArrayId,
    insert: &InsertSpec,
    repo: &mut dyn ArrayRepository,
) -> ExResult<ArrayRecord> {
    let op = "add_element";
    let current = repo.load_array(owner_id, array_id)?;

    let updated = mutator::insert(&current.elements, insert)
        .and_then(|updated| check_storable(&updated).map(|_| updated))
        .map_err(|e| domain_error(e, op, Some(owner_id), Some(array_id)))?;

    repo.save_array(owner_id, array_id, &updated)
}

/// Read a sub-range of a stored array; nothing is saved
///
/// Out-of-range bounds are clamped, never reported.
///
/// # Errors
///
/// `NotFound` if the owner has no such array.
pub fn slice_array(
    owner_id: OwnerId,
    array_id: ArrayId,
    bounds: SliceSpec,
    repo: &dyn ArrayRepository,
) -> ExResult<ArraySnapshot> {
    log_op_start!("slice_array", owner_id = owner_id, array_id = array_id);
    let start = Instant::now();

    let record = repo.load_array(owner_id, array_id).map_err(|e| {
        log_op_error!("slice_array", &e, duration_ms = elapsed_ms(start));
        e
    })?;
    let sliced = mutator::slice(&record.elements, &bounds);

    log_op_end!(
        "slice_array",
        duration_ms = elapsed_ms(start),
        array_len = sliced.len()
    );
    Ok(sliced)
}

/// Stored arrays are non-empty and at most 10000 long
fn check_storable(elements: &ArraySnapshot) -> Result<(), HeapSortError> {
    if elements.is_empty() {
        return Err(HeapSortError::EmptyInput);
    }
    generator::validate_size(elements.len() as i64).map(|_| ())
}
