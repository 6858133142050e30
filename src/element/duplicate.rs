//! Duplicate capability - types that can produce independent copies of
//! themselves.
//!
//! Duplication is the contract behind [`crate::Collection::duplicate`]: the
//! collection invokes `duplicate` once per element and takes ownership of the
//! results, so the derived collection shares no mutable element state with
//! its source.
//!
//! # Laws
//!
//! For every value `x` of an implementing type:
//!
//! ## Equality
//!
//! ```text
//! x.duplicate() == x
//! ```
//!
//! ## Independence
//!
//! `x.duplicate()` owns its state completely; mutating the duplicate never
//! observes or changes `x`, and vice versa.
//!
//! # Relationship to `Clone`
//!
//! `Clone` is the host-level copy and may legitimately share state (for
//! example `Rc::clone` bumps a reference count). `Duplicate` promises
//! independence, which is why reference-counted pointers deliberately have no
//! implementation here. For value types the two coincide, and the provided
//! implementations simply delegate.

/// A type class for values that can produce fully independent duplicates.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Equality
///
/// For all `x`: `x.duplicate() == x` (when the type supports equality).
///
/// ## Independence
///
/// The duplicate shares no mutable state with the original.
///
/// # Examples
///
/// ```rust
/// use uniseq::element::Duplicate;
///
/// let original = String::from("uniseq");
/// let copy = original.duplicate();
///
/// assert_eq!(original, copy);
/// ```
pub trait Duplicate {
    /// Produces an independent duplicate of this value.
    #[must_use]
    fn duplicate(&self) -> Self;
}

// =============================================================================
// Scalar Implementations
// =============================================================================

/// Implements `Duplicate` for `Copy` scalar types, where a bit copy is
/// already fully independent.
macro_rules! duplicate_for_scalar {
    ($($name:ty),* $(,)?) => {
        $(
            impl Duplicate for $name {
                #[inline]
                fn duplicate(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

duplicate_for_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

impl Duplicate for () {
    #[inline]
    fn duplicate(&self) -> Self {}
}

// =============================================================================
// String Implementation
// =============================================================================

impl Duplicate for String {
    #[inline]
    fn duplicate(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// Container Implementations
// =============================================================================

/// Option duplicates its inner value when present.
impl<T: Duplicate> Duplicate for Option<T> {
    fn duplicate(&self) -> Self {
        self.as_ref().map(Duplicate::duplicate)
    }
}

/// Result duplicates whichever side it holds.
impl<T: Duplicate, E: Duplicate> Duplicate for Result<T, E> {
    fn duplicate(&self) -> Self {
        match self {
            Ok(value) => Ok(value.duplicate()),
            Err(error) => Err(error.duplicate()),
        }
    }
}

/// Vec duplicates every element into fresh storage.
impl<T: Duplicate> Duplicate for Vec<T> {
    fn duplicate(&self) -> Self {
        self.iter().map(Duplicate::duplicate).collect()
    }
}

/// Box duplicates the boxed value into a new allocation.
impl<T: Duplicate> Duplicate for Box<T> {
    fn duplicate(&self) -> Self {
        Self::new(self.as_ref().duplicate())
    }
}

// =============================================================================
// Tests
// =============================================================================
