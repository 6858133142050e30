//! The homogeneous, order-preserving collection.
//!
//! This module provides [`Collection`], a dynamically-sized container with a
//! single element type, validated positional access, and a family of
//! query/mutation/functional operations:
//!
//! - [`Collection`]: the container itself.
//! - [`CollectionError`]: the two-kind error taxonomy every fallible
//!   operation reports through.
//!
//! # Control flow
//!
//! Every fallible operation validates its index or range argument before
//! storage is touched, so a returned error guarantees the collection is
//! unchanged. Violations are classified into two kinds:
//!
//! - [`CollectionError::OutOfRange`]: a structurally valid index beyond the
//!   bound for the requested operation (read indices end at `len() - 1`,
//!   insertion indices at `len()`).
//! - [`CollectionError::InvalidArgument`]: a malformed range request
//!   (a start at or past the end, or a span overrunning the end).
//!
//! A failed search is never an error: value and predicate searches report
//! "not found" through `bool`, [`Option`], or an empty collection.
//!
//! # Examples
//!
//! ```rust
//! use uniseq::collection::Collection;
//!
//! let mut collection = Collection::new();
//! collection.add("a");
//! collection.insert(0, "b")?;
//!
//! assert_eq!(collection.at(0)?, &"b");
//! assert_eq!(collection.to_vec(), vec!["b", "a"]);
//! # Ok::<(), uniseq::collection::CollectionError>(())
//! ```

mod bounds;
mod core;
mod error;

pub use self::core::{Collection, CollectionIntoIterator, CollectionIterator};
pub use self::error::{CollectionError, InvalidRangeError, OutOfRangeError};
