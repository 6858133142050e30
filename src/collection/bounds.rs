//! Index and range validation.
//!
//! Every fallible operation on [`crate::Collection`] funnels its index or
//! range argument through one of these validators before storage is touched.
//! Three rules exist:
//!
//! - read access: `index < length`,
//! - insertion access: `index <= length` (the length itself means "append"),
//! - range access: `start < length` and `start + length` does not overrun.
//!
//! Index violations classify as [`CollectionError::OutOfRange`]; range
//! violations classify uniformly as [`CollectionError::InvalidArgument`].

use super::error::{CollectionError, InvalidRangeError, OutOfRangeError};

/// Validates an index used to read or remove an existing element.
pub(crate) fn check_read_index(index: usize, length: usize) -> Result<(), CollectionError> {
    if index < length {
        Ok(())
    } else {
        Err(OutOfRangeError {
            index,
            bound: length,
        }
        .into())
    }
}

/// Validates an index used to insert; the collection length itself is a
/// valid position and means "append".
pub(crate) fn check_insert_index(index: usize, length: usize) -> Result<(), CollectionError> {
    if index <= length {
        Ok(())
    } else {
        Err(OutOfRangeError {
            index,
            bound: length + 1,
        }
        .into())
    }
}

/// Validates a `(start, span)` range against the collection length.
///
/// The start must address an existing element and the span must not run past
/// the end. Arithmetic is overflow-checked so a pathological span near
/// `usize::MAX` is rejected rather than wrapped.
pub(crate) fn check_range(
    start: usize,
    span: usize,
    length: usize,
) -> Result<(), CollectionError> {
    let end = start.checked_add(span);
    if start < length && end.is_some_and(|end| end <= length) {
        Ok(())
    } else {
        Err(InvalidRangeError {
            start,
            length: span,
            available: length,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_index_accepts_below_length() {
        assert!(check_read_index(0, 3).is_ok());
        assert!(check_read_index(2, 3).is_ok());
    }

    #[test]
    fn test_read_index_rejects_length_and_beyond() {
        assert!(matches!(
            check_read_index(3, 3),
            Err(CollectionError::OutOfRange(OutOfRangeError {
                index: 3,
                bound: 3
            }))
        ));
        assert!(check_read_index(0, 0).is_err());
    }

    #[test]
    fn test_insert_index_accepts_length_as_append() {
        assert!(check_insert_index(0, 0).is_ok());
        assert!(check_insert_index(3, 3).is_ok());
    }

    #[test]
    fn test_insert_index_rejects_beyond_length() {
        assert!(matches!(
            check_insert_index(4, 3),
            Err(CollectionError::OutOfRange(OutOfRangeError {
                index: 4,
                bound: 4
            }))
        ));
    }

    #[test]
    fn test_range_accepts_exact_fit() {
        assert!(check_range(0, 10, 10).is_ok());
        assert!(check_range(9, 1, 10).is_ok());
        assert!(check_range(9, 0, 10).is_ok());
    }

    #[test]
    fn test_range_rejects_start_at_or_past_end() {
        assert!(check_range(10, 0, 10).is_err());
        assert!(check_range(20, 22, 10).is_err());
        assert!(check_range(0, 0, 0).is_err());
    }

    #[test]
    fn test_range_rejects_overrun() {
        assert!(matches!(
            check_range(2, 22, 10),
            Err(CollectionError::InvalidArgument(InvalidRangeError {
                start: 2,
                length: 22,
                available: 10
            }))
        ));
    }

    #[test]
    fn test_range_rejects_overflowing_span() {
        assert!(check_range(1, usize::MAX, 10).is_err());
    }
}
