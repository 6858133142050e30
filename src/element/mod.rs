//! Element capability contracts.
//!
//! A [`crate::Collection`] stores plain values and asks nothing of them
//! beyond what each operation needs: equality search uses the standard
//! [`PartialEq`], comparators and predicates are ordinary closures, and
//! duplication uses the [`Duplicate`] trait defined here.
//!
//! # Examples
//!
//! ```rust
//! use uniseq::element::Duplicate;
//!
//! let original = vec![String::from("a"), String::from("b")];
//! let copy = original.duplicate();
//!
//! assert_eq!(original, copy);
//! ```

mod duplicate;

pub use duplicate::Duplicate;
