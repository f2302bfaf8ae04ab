//! # Transform
//!
//! Per-element rule applied in place: values below the threshold are
//! squared, all others become `v * 2 + 5`. Each new value depends only on
//! the element's own prior value.

use crate::constants::{DOUBLE_OFFSET, SQUARE_THRESHOLD};
use crate::error::{ArrayLoopError, Result};
use crate::sequence::Sequence;
use log::debug;

/// Applies the rule to a single value, or `None` if the result would
/// overflow.
pub fn apply_rule(value: i32) -> Option<i32> {
    if value < SQUARE_THRESHOLD {
        value.checked_mul(value)
    } else {
        value
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(DOUBLE_OFFSET))
    }
}

/// Transforms the first `length` elements of `sequence` in index order.
///
/// `length` larger than the sequence fails with `OutOfBounds` before any
/// element is touched. Likewise, if any element's new value would overflow
/// the pass fails with `Overflow` and the sequence is left unchanged.
pub fn square_array(sequence: &mut Sequence, length: usize) -> Result<()> {
    let values = sequence.prefix_mut(length)?;

    let transformed = values
        .iter()
        .enumerate()
        .map(|(index, &value)| apply_rule(value).ok_or(ArrayLoopError::Overflow { index, value }))
        .collect::<Result<Vec<i32>>>()?;
    values.copy_from_slice(&transformed);

    debug!("Transformed {} elements", length);
    Ok(())
}

/// Transforms every element of `sequence`.
pub fn square_all(sequence: &mut Sequence) -> Result<()> {
    let length = sequence.len();
    square_array(sequence, length)
}
