//! # uniseq
//!
//! A homogeneous, order-preserving collection for Rust.
//!
//! ## Overview
//!
//! This library provides [`Collection`], a dynamically-sized container that
//! keeps every element of a single type `T`, preserves insertion order, and
//! validates every index and range before touching storage. It targets
//! callers who want array-like ergonomics (indexing, search, slicing,
//! functional transforms) with explicit, catchable errors instead of
//! panics:
//!
//! - **Validated access**: [`Collection::at`], [`Collection::insert`], and
//!   [`Collection::get_range`] return [`CollectionError`] values that
//!   distinguish a structurally valid but out-of-bounds index from a
//!   malformed range.
//! - **Predicate-driven queries**: `find`, `find_last`, `find_index`,
//!   `find_all`, `exists`, `every`, `disjoin`.
//! - **In-place mutation**: `add`, `insert_range`, `remove`, `remove_all`,
//!   `reverse`, stable `sort_by`.
//! - **Explicit duplication**: [`Collection::duplicate`] produces a new
//!   collection whose elements are independently duplicated through the
//!   [`Duplicate`] capability, never merely re-referenced.
//!
//! The element type is fixed at compile time by the type parameter, so the
//! container is homogeneous by construction; the operations that need more
//! than storage (equality search, duplication) ask for it through ordinary
//! trait bounds.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Collection`] as a plain
//!   sequence.
//!
//! ## Example
//!
//! ```rust
//! use uniseq::prelude::*;
//!
//! let mut numbers: Collection<i32> = Collection::new();
//! numbers.add_range([1, 2, 3, 4]);
//!
//! assert_eq!(numbers.remove_all(|n| n % 2 != 0), 2);
//! assert_eq!(numbers.to_vec(), vec![2, 4]);
//!
//! let digits: Collection<i32> = (0..10).collect();
//! let slice = digits.get_range(2, 4)?;
//! assert_eq!(slice.to_vec(), vec![2, 3, 4, 5]);
//! # Ok::<(), uniseq::collection::CollectionError>(())
//! ```
//!
//! [`CollectionError`]: collection::CollectionError
//! [`Duplicate`]: element::Duplicate

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use uniseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::element::*;
}

pub mod collection;
pub mod element;

pub use collection::{Collection, CollectionError};
pub use element::Duplicate;
