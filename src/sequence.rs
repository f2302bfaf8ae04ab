//! # Sequence
//!
//! Fixed-length, index-addressable buffer of `i32` values. The length is
//! chosen at construction and never changes afterwards.

use crate::constants::MAX_SEQUENCE_LENGTH;
use crate::error::{ArrayLoopError, Result};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Box<[i32]>,
}

impl Sequence {
    /// Builds a sequence of `length` elements where index `i` holds `i + 1`.
    ///
    /// Fails with [`ArrayLoopError::InvalidArgument`] before allocating when
    /// `length` is zero or larger than [`MAX_SEQUENCE_LENGTH`].
    pub fn with_length(length: usize) -> Result<Self> {
        validate_length(length)?;

        let values: Box<[i32]> = (1..=length as i32).collect();
        debug!("Initialized sequence of length {}", values.len());
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for sequences built through [`Sequence::with_length`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<i32> {
        self.values
            .get(index)
            .copied()
            .ok_or(ArrayLoopError::OutOfBounds {
                requested: index,
                capacity: self.len(),
            })
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        let capacity = self.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ArrayLoopError::OutOfBounds {
                requested: index,
                capacity,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }

    /// Returns the first `length` elements, or `OutOfBounds` when the
    /// sequence is shorter than that.
    pub(crate) fn prefix(&self, length: usize) -> Result<&[i32]> {
        self.values.get(..length).ok_or(ArrayLoopError::OutOfBounds {
            requested: length,
            capacity: self.len(),
        })
    }

    pub(crate) fn prefix_mut(&mut self, length: usize) -> Result<&mut [i32]> {
        let capacity = self.len();
        self.values
            .get_mut(..length)
            .ok_or(ArrayLoopError::OutOfBounds {
                requested: length,
                capacity,
            })
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Converts an externally supplied length into a usable one.
///
/// Non-positive values and values above [`MAX_SEQUENCE_LENGTH`] are
/// rejected with `InvalidArgument`.
pub fn checked_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(ArrayLoopError::InvalidArgument(format!(
            "sequence length must be a positive integer, got {}",
            length
        )));
    }
    let length = usize::try_from(length).map_err(|_| {
        ArrayLoopError::InvalidArgument(format!("sequence length {} does not fit in memory", length))
    })?;
    validate_length(length)?;
    Ok(length)
}

fn validate_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(ArrayLoopError::InvalidArgument(
            "sequence length must be a positive integer, got 0".to_string(),
        ));
    }
    if length > MAX_SEQUENCE_LENGTH {
        return Err(ArrayLoopError::InvalidArgument(format!(
            "sequence length {} exceeds maximum {}",
            length, MAX_SEQUENCE_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEQUENCE_LENGTH;

    #[test]
    fn initializes_consecutive_values() {
        let seq = Sequence::with_length(DEFAULT_SEQUENCE_LENGTH).unwrap();
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn single_element_sequence() {
        let seq = Sequence::with_length(1).unwrap();
        assert_eq!(seq.as_slice(), &[1]);
        assert!(!seq.is_empty());
    }

    #[test]
    fn zero_length_is_invalid() {
        let err = Sequence::with_length(0).unwrap_err();
        assert!(matches!(err, ArrayLoopError::InvalidArgument(_)));
    }

    #[test]
    fn oversized_length_is_invalid() {
        let err = Sequence::with_length(MAX_SEQUENCE_LENGTH + 1).unwrap_err();
        assert!(matches!(err, ArrayLoopError::InvalidArgument(_)));
    }

    #[test]
    fn checked_length_rejects_non_positive() {
        for bad in [0, -1, i64::MIN] {
            let err = checked_length(bad).unwrap_err();
            assert!(matches!(err, ArrayLoopError::InvalidArgument(_)), "{}", bad);
        }
        assert_eq!(checked_length(10).unwrap(), 10);
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut seq = Sequence::with_length(3).unwrap();
        seq.set(2, 42).unwrap();
        assert_eq!(seq.get(2).unwrap(), 42);

        match seq.get(3).unwrap_err() {
            ArrayLoopError::OutOfBounds {
                requested,
                capacity,
            } => {
                assert_eq!(requested, 3);
                assert_eq!(capacity, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(seq.set(7, 1).is_err());
        assert_eq!(seq.as_slice(), &[1, 2, 42]);
    }

    #[test]
    fn prefix_never_exceeds_capacity() {
        let mut seq = Sequence::with_length(4).unwrap();
        assert_eq!(seq.prefix(2).unwrap(), &[1, 2]);
        assert_eq!(seq.prefix(0).unwrap(), &[] as &[i32]);
        assert!(seq.prefix(5).is_err());
        assert!(seq.prefix_mut(5).is_err());
    }
}
