//! Error types for collection operations.
//!
//! This module provides the error taxonomy reported by fallible
//! [`crate::Collection`] operations. There are exactly two kinds:
//!
//! - [`OutOfRangeError`]: a structurally valid index beyond the bound the
//!   operation accepts.
//! - [`InvalidRangeError`]: a malformed range request.
//!
//! Every error is reported synchronously to the caller before any mutation
//! occurs, so a returned error guarantees the collection is unchanged.
//! A failed search ("not found") is never an error.

/// Represents an index beyond the valid bound for the requested operation.
///
/// Read access (`at`, `remove_at`) accepts indices strictly below the
/// collection length; insertion access (`insert`, `insert_range`) also
/// accepts the length itself, meaning "append". The `bound` field records
/// the exclusive upper bound the operation applied.
///
/// # Examples
///
/// ```rust
/// use uniseq::collection::OutOfRangeError;
///
/// let error = OutOfRangeError { index: 5, bound: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "index 5 is out of range (must be less than 3)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// The exclusive upper bound on accepted indices: the collection length
    /// for read access, length + 1 for insertion access.
    pub bound: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of range (must be less than {})",
            self.index, self.bound
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Represents a malformed range request.
///
/// A range `(start, length)` is well-formed only when `start` addresses an
/// existing element and `start + length` does not run past the end of the
/// collection. Every violation is reported through this one type,
/// distinguishing malformed ranges from single-index [`OutOfRangeError`]s.
///
/// # Examples
///
/// ```rust
/// use uniseq::collection::InvalidRangeError;
///
/// let error = InvalidRangeError { start: 2, length: 22, available: 10 };
/// assert_eq!(
///     format!("{}", error),
///     "range starting at 2 with length 22 does not fit a collection of 10 elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    /// The requested start index.
    pub start: usize,
    /// The requested number of elements.
    pub length: usize,
    /// The number of elements in the collection at the time of the call.
    pub available: usize,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "range starting at {} with length {} does not fit a collection of {} elements",
            self.start, self.length, self.available
        )
    }
}

impl std::error::Error for InvalidRangeError {}

/// Represents errors that can occur in collection operations.
///
/// This enum provides a unified error type with one variant per error kind,
/// so callers can match on the kind while still reaching the structured
/// detail of the underlying error.
///
/// # Examples
///
/// ```rust
/// use uniseq::collection::{Collection, CollectionError};
///
/// let collection: Collection<i32> = (0..3).collect();
///
/// match collection.at(10) {
///     Err(CollectionError::OutOfRange(error)) => {
///         assert_eq!(error.index, 10);
///         assert_eq!(error.bound, 3);
///     }
///     other => panic!("expected an out-of-range error, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A malformed argument: the surviving case is a malformed range.
    InvalidArgument(InvalidRangeError),
    /// A structurally valid index beyond the operation's current bound.
    OutOfRange(OutOfRangeError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::OutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {}

impl From<InvalidRangeError> for CollectionError {
    #[inline]
    fn from(error: InvalidRangeError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<OutOfRangeError> for CollectionError {
    #[inline]
    fn from(error: OutOfRangeError) -> Self {
        Self::OutOfRange(error)
    }
}
