//! The `compose!` macro for variadic transducer composition.
//!
//! This module provides the [`compose!`] macro which composes transducers
//! from right to left, following the mathematical notation for function
//! composition.

/// Composes transducers from right to left.
///
/// `compose!(t1, t2, t3)` is the transducer `t1 ∘ t2 ∘ t3`: applied to a
/// base reducer it wraps as `t1(t2(t3(base)))`. Because `t1` becomes the
/// outermost wrapper, each element flows through `t1`'s logic first at
/// reduction time — listing order is per-element execution order, like a
/// pipeline read left to right.
///
/// # Laws
///
/// The composition operation satisfies the following laws (up to
/// observable reduction behavior):
///
/// - **Associativity**: `compose!(t1, compose!(t2, t3)) == compose!(compose!(t1, t2), t3)`
/// - **Left Identity**: `compose!(identity(), t) == t`
/// - **Right Identity**: `compose!(t, identity()) == t`
///
/// # Syntax
///
/// - `compose!()` - The [`Identity`](crate::Identity) transducer
/// - `compose!(t)` - Returns `t` unchanged
/// - `compose!(t1, t2)` - `Compose::new(t1, t2)`
/// - `compose!(t1, t2, t3, ...)` - Composes any number of transducers
///
/// # Type Requirements
///
/// Adjacent stages must agree on element types: each transducer's `Out`
/// must be the next one's input. Mismatches are compile-time errors at
/// the use site.
///
/// # Examples
///
/// ## Pipeline order
///
/// ```rust
/// use xducers::prelude::*;
///
/// // Elements are doubled before the predicate sees them.
/// let pipeline = compose!(
///     map(|value: i32| value * 2),
///     filter(|value: &i32| *value > 2),
/// );
///
/// let collected = transduce(
///     &pipeline,
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2, 3],
/// );
///
/// assert_eq!(collected, vec![4, 6]);
/// ```
///
/// ## Zero transducers: identity
///
/// ```rust
/// use xducers::prelude::*;
///
/// let total = transduce(
///     &compose!(),
///     |accumulator: i32, element: i32| accumulator + element,
///     0,
///     vec![1, 2, 3],
/// );
/// assert_eq!(total, 6);
/// ```
///
/// ## Mixing stateless and stateful stages
///
/// ```rust
/// use xducers::prelude::*;
///
/// let pipeline = compose!(
///     filter(|value: &i32| value % 2 == 0),
///     map(|value: i32| value * 10),
///     take(2),
/// );
///
/// let collected = transduce(
///     &pipeline,
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     1..=6,
/// );
///
/// assert_eq!(collected, vec![20, 40]);
/// ```
#[macro_export]
macro_rules! compose {
    // No transducers: the identity transducer
    () => {
        $crate::transducer::Identity
    };

    // Single transducer: identity composition
    // Just returns the transducer as-is
    ($transducer:expr $(,)?) => {
        $transducer
    };

    // Two or more transducers: recursive composition
    // compose!(t1, t2, ...) = Compose::new(t1, compose!(t2, ...))
    ($outer_transducer:expr, $($remaining_transducers:expr),+ $(,)?) => {
        $crate::transducer::Compose::new(
            $outer_transducer,
            $crate::compose!($($remaining_transducers),+),
        )
    };
}
