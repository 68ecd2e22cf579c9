//! Property-based tests for transducer laws.
//!
//! This module verifies that composition and the concrete transducers
//! satisfy the required laws:
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(t1, compose!(t2, t3)) == compose!(compose!(t1, t2), t3)`
//! - **Left Identity**: `compose!(identity(), t) == t`
//! - **Right Identity**: `compose!(t, identity()) == t`
//! - **Empty composition**: `compose!()` reduces like a plain fold
//!
//! ## Fusion Laws
//! - `compose!(map(f), map(g)) == map(g ∘ f)`
//! - `compose!(filter(p), filter(q)) == filter(p && q)`
//!
//! ## take/drop Laws
//! - `take(n)` output ++ `drop(n)` output == the input (fresh instances)
//! - output lengths are `min(n, len)` and `len - min(n, len)`
//! - a spent countdown reads `n - forwarded` afterwards
//!
//! Using proptest, we generate random inputs to thoroughly verify these
//! laws across a wide range of values.

use proptest::collection::vec;
use proptest::prelude::*;
use xducers::prelude::*;

fn push(mut accumulator: Vec<i32>, element: i32) -> Vec<i32> {
    accumulator.push(element);
    accumulator
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity(), t) reduces like t alone.
    #[test]
    fn prop_compose_left_identity(input in vec(any::<i32>(), 0..64)) {
        let wrapped = compose!(identity(), map(|value: i32| value.wrapping_mul(2)));
        let alone = map(|value: i32| value.wrapping_mul(2));

        prop_assert_eq!(
            transduce(&wrapped, push, Vec::new(), input.clone()),
            transduce(&alone, push, Vec::new(), input)
        );
    }

    /// Right Identity Law: compose!(t, identity()) reduces like t alone.
    #[test]
    fn prop_compose_right_identity(input in vec(any::<i32>(), 0..64)) {
        let wrapped = compose!(map(|value: i32| value.wrapping_mul(2)), identity());
        let alone = map(|value: i32| value.wrapping_mul(2));

        prop_assert_eq!(
            transduce(&wrapped, push, Vec::new(), input.clone()),
            transduce(&alone, push, Vec::new(), input)
        );
    }

    /// Associativity Law: grouping of compose! does not change reduction.
    #[test]
    fn prop_compose_associativity(input in vec(any::<i32>(), 0..64)) {
        let stage1 = map(|value: i32| value.wrapping_add(1));
        let stage2 = filter(|value: &i32| value % 3 != 0);
        let stage3 = map(|value: i32| value.wrapping_mul(2));

        let flat = transduce(
            &compose!(stage1, stage2, stage3),
            push,
            Vec::new(),
            input.clone(),
        );
        let left_grouped = transduce(
            &compose!(compose!(stage1, stage2), stage3),
            push,
            Vec::new(),
            input.clone(),
        );
        let right_grouped = transduce(
            &compose!(stage1, compose!(stage2, stage3)),
            push,
            Vec::new(),
            input,
        );

        prop_assert_eq!(&left_grouped, &flat);
        prop_assert_eq!(&right_grouped, &flat);
    }

    /// Empty composition reduces exactly like Iterator::fold.
    #[test]
    fn prop_empty_compose_matches_plain_fold(input in vec(any::<i32>(), 0..64)) {
        let transduced = transduce(
            &compose!(),
            |accumulator: i64, element: i32| accumulator + i64::from(element),
            0i64,
            input.clone(),
        );
        let folded = input
            .into_iter()
            .fold(0i64, |accumulator, element| accumulator + i64::from(element));

        prop_assert_eq!(transduced, folded);
    }
}

// =============================================================================
// Fusion Laws
// =============================================================================

proptest! {
    /// map fusion: mapping f then g equals mapping the composition.
    #[test]
    fn prop_map_fusion(input in vec(any::<i32>(), 0..64)) {
        let staged = compose!(
            map(|value: i32| value.wrapping_add(3)),
            map(|value: i32| value.wrapping_mul(2)),
        );
        let fused = map(|value: i32| value.wrapping_add(3).wrapping_mul(2));

        prop_assert_eq!(
            transduce(&staged, push, Vec::new(), input.clone()),
            transduce(&fused, push, Vec::new(), input)
        );
    }

    /// filter fusion: filtering p then q equals filtering p && q.
    #[test]
    fn prop_filter_fusion(input in vec(any::<i32>(), 0..64)) {
        let staged = compose!(
            filter(|value: &i32| value % 2 == 0),
            filter(|value: &i32| *value > 0),
        );
        let fused = filter(|value: &i32| value % 2 == 0 && *value > 0);

        prop_assert_eq!(
            transduce(&staged, push, Vec::new(), input.clone()),
            transduce(&fused, push, Vec::new(), input)
        );
    }

    /// map matches Iterator::map, filter matches Iterator::filter.
    #[test]
    fn prop_stateless_transducers_match_iterator_adapters(input in vec(any::<i32>(), 0..64)) {
        let mapped = transduce(
            &map(|value: i32| value.wrapping_mul(5)),
            push,
            Vec::new(),
            input.clone(),
        );
        let iterator_mapped: Vec<i32> =
            input.iter().map(|value| value.wrapping_mul(5)).collect();
        prop_assert_eq!(mapped, iterator_mapped);

        let filtered = transduce(
            &filter(|value: &i32| value % 2 == 0),
            push,
            Vec::new(),
            input.clone(),
        );
        let iterator_filtered: Vec<i32> =
            input.into_iter().filter(|value| value % 2 == 0).collect();
        prop_assert_eq!(filtered, iterator_filtered);
    }
}

// =============================================================================
// take/drop Laws
// =============================================================================

proptest! {
    /// Fresh take(n) and drop(n) split the input exactly.
    #[test]
    fn prop_take_and_drop_complement(
        input in vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        let taken = transduce(&take(count), push, Vec::new(), input.clone());
        let dropped = transduce(&drop(count), push, Vec::new(), input.clone());

        let mut rejoined = taken;
        rejoined.extend(dropped);
        prop_assert_eq!(rejoined, input);
    }

    /// take(n) forwards min(n, len) elements, in order, from the front.
    #[test]
    fn prop_take_forwards_a_prefix(
        input in vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        let taken = transduce(&take(count), push, Vec::new(), input.clone());

        let expected_length = count.min(input.len());
        prop_assert_eq!(taken.len(), expected_length);
        prop_assert_eq!(taken.as_slice(), &input[..expected_length]);
    }

    /// drop(n) forwards everything but the first min(n, len) elements.
    #[test]
    fn prop_drop_forwards_a_suffix(
        input in vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        let dropped = transduce(&drop(count), push, Vec::new(), input.clone());

        let skipped = count.min(input.len());
        prop_assert_eq!(dropped.as_slice(), &input[skipped..]);
    }

    /// The countdown only ever decreases, and by exactly the number of
    /// elements forwarded.
    #[test]
    fn prop_take_countdown_is_spent_monotonically(
        input in vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        let taking = take(count);
        let before = taking.remaining();
        let taken = transduce(&taking, push, Vec::new(), input);

        prop_assert_eq!(before, count);
        prop_assert_eq!(taking.remaining(), count - taken.len());
    }
}
