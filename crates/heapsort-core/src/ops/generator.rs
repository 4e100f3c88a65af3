use rand::Rng;

use crate::errors::{HeapSortError, Result};
use crate::model::{ArraySnapshot, GenerateSpec};

/// Smallest accepted array length for generated and stored arrays
pub const MIN_ARRAY_SIZE: usize = 1;
/// Largest accepted array length for generated and stored arrays
pub const MAX_ARRAY_SIZE: usize = 10_000;

/// Check a requested length against `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]`
///
/// # Errors
///
/// `InvalidSize` when out of bounds.
pub fn validate_size(size: i64) -> Result<usize> {
    match usize::try_from(size) {
        Ok(n) if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&n) => Ok(n),
        _ => Err(HeapSortError::InvalidSize {
            size,
            min: MIN_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        }),
    }
}

/// Generate `spec.size` integers, each drawn uniformly from
/// `[spec.min, spec.max]` inclusive.
///
/// The caller supplies the RNG; a seeded one makes the output reproducible.
///
/// # Errors
///
/// - `InvalidSize` if `spec.size` is outside `[1, 10000]`
/// - `InvalidRange` if `spec.min > spec.max`
pub fn generate<R: Rng + ?Sized>(spec: &GenerateSpec, rng: &mut R) -> Result<ArraySnapshot> {
    let size = validate_size(spec.size)?;

    if spec.min > spec.max {
        return Err(HeapSortError::InvalidRange {
            min: spec.min,
            max: spec.max,
        });
    }

    Ok((0..size).map(|_| rng.gen_range(spec.min..=spec.max)).collect())
}
