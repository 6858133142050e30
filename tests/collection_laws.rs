//! Property-based tests for Collection laws.
//!
//! Verifies the structural invariants of the container with proptest:
//! ordering, partition completeness, removal accounting, bounds
//! classification, and duplication independence.

use proptest::prelude::*;
use uniseq::collection::{Collection, CollectionError};

proptest! {
    /// Reverse Law: reverse is an involution.
    #[test]
    fn prop_reverse_involution(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut collection: Collection<i32> = elements.iter().copied().collect();

        collection.reverse();
        collection.reverse();

        prop_assert_eq!(collection.to_vec(), elements);
    }

    /// Access Law: `at` succeeds exactly on `0..len` and classifies
    /// everything else as out of range.
    #[test]
    fn prop_at_total_on_valid_indices(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        probe in 0usize..100
    ) {
        let collection: Collection<i32> = elements.iter().copied().collect();

        if probe < collection.len() {
            prop_assert_eq!(collection.at(probe).unwrap(), &elements[probe]);
        } else {
            prop_assert!(matches!(
                collection.at(probe),
                Err(CollectionError::OutOfRange(_))
            ));
        }
    }

    /// Count Law: `add` grows the collection by exactly one, `add_range`
    /// by the batch size.
    #[test]
    fn prop_add_counts(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        batch in prop::collection::vec(any::<i32>(), 0..50),
        single: i32
    ) {
        let mut collection: Collection<i32> = elements.iter().copied().collect();

        let before = collection.len();
        collection.add(single);
        prop_assert_eq!(collection.len(), before + 1);

        collection.add_range(batch.clone());
        prop_assert_eq!(collection.len(), before + 1 + batch.len());
    }

    /// Partition Law: disjoin splits the collection into exactly the
    /// matching and non-matching halves, both order-preserving, and
    /// find_all equals the matching half.
    #[test]
    fn prop_disjoin_is_an_order_preserving_partition(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let collection: Collection<i32> = elements.iter().copied().collect();
        let is_even = |n: &i32| n % 2 == 0;

        let (pass, reject) = collection.disjoin(is_even);

        let expected_pass: Vec<i32> = elements.iter().copied().filter(|n| n % 2 == 0).collect();
        let expected_reject: Vec<i32> = elements.iter().copied().filter(|n| n % 2 != 0).collect();

        prop_assert_eq!(pass.to_vec(), expected_pass.clone());
        prop_assert_eq!(reject.to_vec(), expected_reject);

        prop_assert_eq!(collection.find_all(is_even).to_vec(), expected_pass);
        prop_assert_eq!(pass.len() + reject.len(), collection.len());
    }

    /// Removal Law: remove_all returns the length delta and no survivor
    /// satisfies the predicate.
    #[test]
    fn prop_remove_all_accounting(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut collection: Collection<i32> = elements.iter().copied().collect();

        let before = collection.len();
        let removed = collection.remove_all(|n| n % 3 == 0);

        prop_assert_eq!(removed, before - collection.len());
        prop_assert!(!collection.exists(|n| n % 3 == 0));
    }

    /// First/Last Removal Law: remove and remove_last drop exactly one
    /// matching element, and report false on an empty match set.
    #[test]
    fn prop_remove_drops_exactly_one_match(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let has_match = elements.iter().any(|n| n % 2 == 0);

        let mut from_front: Collection<i32> = elements.iter().copied().collect();
        let mut from_back: Collection<i32> = elements.iter().copied().collect();

        prop_assert_eq!(from_front.remove(|n| n % 2 == 0), has_match);
        prop_assert_eq!(from_back.remove_last(|n| n % 2 == 0), has_match);

        let expected = if has_match { elements.len() - 1 } else { elements.len() };
        prop_assert_eq!(from_front.len(), expected);
        prop_assert_eq!(from_back.len(), expected);
    }

    /// Insert-Remove Law: inserting at a valid position and removing the
    /// same position restores the original sequence.
    #[test]
    fn prop_insert_then_remove_at_is_identity(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        position in 0usize..51,
        value: i32
    ) {
        let mut collection: Collection<i32> = elements.iter().copied().collect();
        let position = position.min(collection.len());

        collection.insert(position, value).unwrap();
        let removed = collection.remove_at(position).unwrap();

        prop_assert_eq!(removed, value);
        prop_assert_eq!(collection.to_vec(), elements);
    }

    /// Range Law: every well-formed range equals the equivalent slice of
    /// the source, and malformed ranges fail uniformly as invalid
    /// arguments.
    #[test]
    fn prop_get_range_matches_slice(
        elements in prop::collection::vec(any::<i32>(), 1..50),
        start in 0usize..60,
        length in 0usize..60
    ) {
        let collection: Collection<i32> = elements.iter().copied().collect();

        match collection.get_range(start, length) {
            Ok(subset) => {
                prop_assert!(start < elements.len());
                prop_assert!(start + length <= elements.len());
                prop_assert_eq!(subset.to_vec(), elements[start..start + length].to_vec());
            }
            Err(error) => {
                prop_assert!(start >= elements.len() || start + length > elements.len());
                prop_assert!(matches!(error, CollectionError::InvalidArgument(_)));
            }
        }
    }

    /// Insertable-Index Law: the valid insertion positions are exactly
    /// `0..=len`.
    #[test]
    fn prop_is_insertable_index(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        probe in 0usize..100
    ) {
        let collection: Collection<i32> = elements.iter().copied().collect();
        prop_assert_eq!(collection.is_insertable_index(probe), probe <= collection.len());
    }

    /// Sort Law: sorting with the natural three-way comparator agrees with
    /// the standard library sort.
    #[test]
    fn prop_sort_by_agrees_with_std(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut collection: Collection<i32> = elements.iter().copied().collect();
        collection.sort_by(|left, right| left.cmp(right));

        let mut expected = elements;
        expected.sort();

        prop_assert_eq!(collection.to_vec(), expected);
    }

    /// Duplication Law: the duplicate is value-equal to the source and
    /// owns disjoint element state.
    #[test]
    fn prop_duplicate_equal_but_independent(
        elements in prop::collection::vec(".*", 0..20)
    ) {
        let collection: Collection<String> = elements.into_iter().collect();
        let copy = collection.duplicate();

        prop_assert_eq!(&collection, &copy);
        for (original, duplicated) in collection.iter().zip(copy.iter()) {
            if !original.is_empty() {
                prop_assert!(!std::ptr::eq(original.as_ptr(), duplicated.as_ptr()));
            }
        }
    }

    /// Fold Law: fold_left over addition equals the iterator sum plus the
    /// seed.
    #[test]
    fn prop_fold_left_sums(
        elements in prop::collection::vec(any::<i16>(), 0..100),
        seed: i16
    ) {
        let collection: Collection<i64> = elements.iter().map(|n| i64::from(*n)).collect();
        let total = collection.fold_left(i64::from(seed), |accumulator, n| accumulator + n);

        let expected: i64 = i64::from(seed) + collection.iter().sum::<i64>();
        prop_assert_eq!(total, expected);
    }
}
