//! The [`Collection`] container: storage, mutation, queries, duplication.
//!
//! # Overview
//!
//! `Collection<T>` is a homogeneous, order-preserving, dynamically-sized
//! container over a single contiguous buffer. It provides:
//!
//! - O(1) `len`, `is_empty`, `at`, `get`, `add`
//! - O(n) `insert`, `remove_at`, predicate removal, search, slicing
//! - O(n log n) stable `sort_by`
//!
//! All fallible operations validate their index or range argument before
//! storage is touched, so a returned error guarantees the collection is
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use uniseq::collection::Collection;
//!
//! let mut collection: Collection<i32> = Collection::new();
//! collection.add(1);
//! collection.add_range([2, 3, 4]);
//!
//! assert_eq!(collection.len(), 4);
//! assert_eq!(collection.find(|n| n % 2 == 0), Some(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::element::Duplicate;

use super::bounds;
use super::error::CollectionError;

// =============================================================================
// Collection Definition
// =============================================================================

/// A homogeneous, order-preserving, dynamically-sized collection.
///
/// The element type is fixed by the type parameter for the collection's
/// entire life; insertion order is significant and preserved by every
/// operation except the explicit [`reverse`](Self::reverse) and
/// [`sort_by`](Self::sort_by). Valid read indices are `0..len()`; valid
/// insertion indices are `0..=len()` (the length itself means "append").
///
/// Derived collections (from [`find_all`](Self::find_all),
/// [`get_range`](Self::get_range), [`disjoin`](Self::disjoin), and
/// [`duplicate`](Self::duplicate)) are new, independent instances owning
/// their own storage.
///
/// # Time Complexity
///
/// | Operation     | Complexity     |
/// |---------------|----------------|
/// | `new`         | O(1)           |
/// | `at` / `get`  | O(1)           |
/// | `add`         | amortized O(1) |
/// | `insert`      | O(n)           |
/// | `remove_at`   | O(n)           |
/// | `remove_all`  | O(n)           |
/// | `find` family | O(n)           |
/// | `get_range`   | O(length)      |
/// | `sort_by`     | O(n log n)     |
/// | `duplicate`   | O(n)           |
///
/// # Examples
///
/// ```rust
/// use uniseq::collection::Collection;
///
/// let collection: Collection<i32> = (0..10).collect();
/// assert_eq!(collection.len(), 10);
/// assert_eq!(collection.at(5)?, &5);
/// # Ok::<(), uniseq::collection::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct Collection<T> {
    /// The ordered element buffer; the sole owner of the stored values.
    items: Vec<T>,
}

// =============================================================================
// Storage Core
// =============================================================================

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new empty collection with space for at least `capacity`
    /// elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=5).collect();
    /// assert_eq!(collection.len(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the name of the element type this collection is bound to.
    ///
    /// Diagnostic only: the string is whatever the compiler reports for `T`
    /// and is not guaranteed to be stable across compiler versions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert_eq!(collection.element_type_name(), "i32");
    /// ```
    #[inline]
    #[must_use]
    pub fn element_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (0..3).collect();
    /// assert_eq!(collection.at(1)?, &1);
    /// assert!(collection.at(3).is_err());
    /// # Ok::<(), uniseq::collection::CollectionError>(())
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, CollectionError> {
        bounds::check_read_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Returns a reference to the element at `index`, or `None` when the
    /// index is out of bounds.
    ///
    /// The non-failing counterpart of [`at`](Self::at).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the last element, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the elements as a slice in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` if `index` is a valid insertion position.
    ///
    /// Insertion positions run from 0 through `len()` inclusive; the length
    /// itself means "append".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (0..2).collect();
    /// assert!(collection.is_insertable_index(0));
    /// assert!(collection.is_insertable_index(2));
    /// assert!(!collection.is_insertable_index(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_insertable_index(&self, index: usize) -> bool {
        index <= self.items.len()
    }

    /// Removes all elements.
    ///
    /// The element type and any reserved capacity are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = (0..3).collect();
    /// collection.clear();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over references to the elements in insertion
    /// order.
    ///
    /// The iterator borrows the collection, so the borrow checker rejects
    /// mutation while iteration is in progress; use
    /// [`to_vec`](Self::to_vec) when an owned snapshot is needed instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=3).collect();
    /// let doubled: Vec<i32> = collection.iter().map(|n| n * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, T> {
        CollectionIterator {
            inner: self.items.iter(),
        }
    }
}

// =============================================================================
// Mutation Layer
// =============================================================================

impl<T> Collection<T> {
    /// Appends an element to the end of the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.add(7);
    /// assert_eq!(collection.len(), 1);
    /// assert_eq!(collection.get(0), Some(&7));
    /// ```
    #[inline]
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items` in input order.
    ///
    /// Type conformance of the whole batch is guaranteed by the element type
    /// parameter, so the batch can never be partially applied for a type
    /// reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.add(0);
    /// collection.add_range([1, 2, 3]);
    /// assert_eq!(collection.to_vec(), vec![0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Inserts an element at `index`, shifting subsequent elements right.
    ///
    /// An `index` equal to `len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()`; the
    /// collection is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = (1..=2).collect();
    /// collection.insert(1, 9)?;
    /// assert_eq!(collection.to_vec(), vec![1, 9, 2]);
    ///
    /// assert!(collection.insert(100, 9).is_err());
    /// # Ok::<(), uniseq::collection::CollectionError>(())
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
        bounds::check_insert_index(index, self.items.len())?;
        self.items.insert(index, item);
        Ok(())
    }

    /// Inserts every element of `items` at `index`, preserving their
    /// relative order and shifting subsequent elements right.
    ///
    /// An `index` equal to `len()` appends the batch.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()`. The
    /// index is validated before the batch is consumed, so a failed call
    /// leaves the collection unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = vec![1, 2].into();
    /// collection.insert_range(1, [3, 4])?;
    /// assert_eq!(collection.to_vec(), vec![1, 3, 4, 2]);
    /// # Ok::<(), uniseq::collection::CollectionError>(())
    /// ```
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        bounds::check_insert_index(index, self.items.len())?;
        self.items.splice(index..index, items);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`; the
    /// collection is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = vec![3, 2, 1].into();
    /// assert_eq!(collection.remove_at(1)?, 2);
    /// assert_eq!(collection.to_vec(), vec![3, 1]);
    /// # Ok::<(), uniseq::collection::CollectionError>(())
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        bounds::check_read_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    /// Removes the first element satisfying `predicate`.
    ///
    /// Returns `true` if an element was removed; a collection with no match
    /// is left unchanged and yields `false`, never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = (1..=4).collect();
    /// assert!(collection.remove(|n| n % 2 != 0));
    /// assert_eq!(collection.to_vec(), vec![2, 3, 4]);
    /// assert!(!collection.remove(|n| *n == 42));
    /// ```
    pub fn remove<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().position(predicate) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the last element satisfying `predicate`.
    ///
    /// Same boolean contract as [`remove`](Self::remove), scanning from the
    /// end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = (1..=4).collect();
    /// assert!(collection.remove_last(|n| n % 2 != 0));
    /// assert_eq!(collection.to_vec(), vec![1, 2, 4]);
    /// ```
    pub fn remove_last<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().rposition(predicate) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element satisfying `predicate`, preserving the relative
    /// order of the survivors.
    ///
    /// Returns the number of elements removed; 0 is a normal result, never
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = (1..=4).collect();
    /// assert_eq!(collection.remove_all(|n| n % 2 != 0), 2);
    /// assert_eq!(collection.to_vec(), vec![2, 4]);
    /// ```
    pub fn remove_all<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let length_before = self.items.len();
        self.items.retain(|element| !predicate(element));
        length_before - self.items.len()
    }

    /// Reverses the element order in place.
    ///
    /// Applying `reverse` twice restores the original order.
    #[inline]
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sorts the elements in place with a three-way comparator.
    ///
    /// The sort is **stable**: elements that compare equal keep their
    /// relative insertion order. This delegates to the standard library's
    /// stable slice sort.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let mut collection: Collection<i32> = vec![3, 1, 4, 2].into();
    /// collection.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}

impl<T: Ord> Collection<T> {
    /// Sorts the elements in place by their natural order.
    ///
    /// Stable, like [`sort_by`](Self::sort_by).
    #[inline]
    pub fn sort(&mut self) {
        self.items.sort();
    }
}

// =============================================================================
// Query / Functional Layer
// =============================================================================

impl<T> Collection<T> {
    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![54, 32].into();
    /// assert!(collection.exists(|n| *n == 32));
    /// assert!(!collection.exists(|n| *n == 42));
    /// ```
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously true on an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![2, 4, 6].into();
    /// assert!(collection.every(|n| n % 2 == 0));
    /// assert!(!collection.every(|n| n % 2 != 0));
    /// ```
    #[must_use]
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Returns a reference to the first element satisfying `predicate`, or
    /// `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![54, 32].into();
    /// assert_eq!(collection.find(|n| *n == 32), Some(&32));
    /// assert_eq!(collection.find(|n| *n == 42), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|element| predicate(element))
    }

    /// Returns a reference to the last element satisfying `predicate`, or
    /// `None` when nothing matches.
    #[must_use]
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|element| predicate(element))
    }

    /// Returns the index of the first element satisfying `predicate`, or
    /// `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![2, 4, 6, 8].into();
    /// assert_eq!(collection.find_index(|n| n % 2 == 0), Some(0));
    /// assert_eq!(collection.find_index(|n| n % 2 != 0), None);
    /// ```
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Returns the index of the last element satisfying `predicate`, or
    /// `None` when nothing matches.
    #[must_use]
    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rposition(predicate)
    }

    /// Folds the elements left to right into an accumulator.
    ///
    /// The initial accumulator is always supplied explicitly; it fixes the
    /// accumulator type, so non-numeric reductions are expressed the same
    /// way as numeric ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=3).collect();
    /// assert_eq!(collection.fold_left(0, |total, n| total + n), 6);
    /// assert_eq!(collection.fold_left(2, |total, n| total + n), 8);
    /// ```
    #[must_use]
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.items.iter().fold(initial, function)
    }
}

impl<T: PartialEq> Collection<T> {
    /// Returns `true` if some element is structurally equal to `item`.
    ///
    /// The needle necessarily has the collection's element type, so a
    /// well-typed value that merely fails to match is a legitimate `false`,
    /// never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=4).collect();
    /// assert!(collection.contains(&3));
    /// assert!(!collection.contains(&5));
    /// ```
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns a new collection holding clones of every element satisfying
    /// `predicate`, in original order.
    ///
    /// Zero matches yield an empty collection, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![54, 32, 32].into();
    /// let matches = collection.find_all(|n| *n == 32);
    /// assert_eq!(matches.to_vec(), vec![32, 32]);
    /// ```
    #[must_use]
    pub fn find_all<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns a new collection holding the contiguous slice
    /// `[start, start + length)`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `start` does not
    /// address an existing element or `start + length` runs past the end.
    /// Malformed ranges fail uniformly with this kind, distinguishing them
    /// from single-index out-of-range errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (0..10).collect();
    /// assert_eq!(collection.get_range(2, 4)?.to_vec(), vec![2, 3, 4, 5]);
    /// assert!(collection.get_range(20, 22).is_err());
    /// assert!(collection.get_range(2, 22).is_err());
    /// # Ok::<(), uniseq::collection::CollectionError>(())
    /// ```
    pub fn get_range(&self, start: usize, length: usize) -> Result<Self, CollectionError> {
        bounds::check_range(start, length, self.items.len())?;
        Ok(self.items[start..start + length].iter().cloned().collect())
    }

    /// Partitions the elements into two new collections: those satisfying
    /// `predicate` and those that do not, each preserving original relative
    /// order.
    ///
    /// The source collection is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let collection: Collection<i32> = (2..=6).collect();
    /// let (evens, odds) = collection.disjoin(|n| n % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(odds.to_vec(), vec![3, 5]);
    /// ```
    #[must_use]
    pub fn disjoin<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&T) -> bool,
    {
        let mut matches = Vec::new();
        let mut rest = Vec::new();

        for element in &self.items {
            if predicate(element) {
                matches.push(element.clone());
            } else {
                rest.push(element.clone());
            }
        }

        (Self { items: matches }, Self { items: rest })
    }

    /// Returns the elements as a plain `Vec` in insertion order.
    ///
    /// The result is an owned snapshot: later mutation of the collection
    /// does not affect it.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

// =============================================================================
// Duplication
// =============================================================================

impl<T: Duplicate> Collection<T> {
    /// Produces a new collection whose elements are independent duplicates
    /// of this collection's elements, in the same order.
    ///
    /// Each element type produces its own duplicate through [`Duplicate`];
    /// the collection merely invokes that capability per element. The source
    /// collection and its elements are left unmodified, and the result is
    /// value-equal to the source while sharing no element state with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniseq::collection::Collection;
    ///
    /// let source: Collection<String> = vec![String::from("a")].into();
    /// let copy = source.duplicate();
    ///
    /// assert_eq!(source, copy);
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            items: self.items.iter().map(Duplicate::duplicate).collect(),
        }
    }
}

/// A collection of duplicable elements is itself duplicable, so nested
/// collections duplicate deeply.
impl<T: Duplicate> Duplicate for Collection<T> {
    #[inline]
    fn duplicate(&self) -> Self {
        Self {
            items: self.items.iter().map(Duplicate::duplicate).collect(),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`Collection`].
#[derive(Debug, Clone)]
pub struct CollectionIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for CollectionIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for CollectionIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of a [`Collection`].
#[derive(Debug)]
pub struct CollectionIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for CollectionIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for CollectionIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = CollectionIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIterator {
            inner: self.items.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = CollectionIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Collection<T> {}

/// The hash covers the length first and then each element in order, so
/// equal collections hash equally and order matters.
impl<T: Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.len().hash(state);
        for element in &self.items {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// A collection is a plain owner of its elements; auto traits follow T.
static_assertions::assert_impl_all!(Collection<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Collection<String>: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.items {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CollectionVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Collection<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut items = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            items.push(element);
        }
        Ok(Collection { items })
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Collection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
