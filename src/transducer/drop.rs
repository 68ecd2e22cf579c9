//! The `drop` transducer: discard the first `n` elements, then forward.

use super::Transducer;
use super::countdown::Countdown;
use crate::reducing::Reducing;

/// The transducer built by [`drop`].
///
/// Stateful, symmetric to [`Taking`](super::Taking): a `Dropping` owns a
/// private countdown spent as elements are *discarded*. Every reducing
/// step built from the same `Dropping` — including through [`Clone`],
/// which shares the countdown — draws on the one quota, so a reused
/// instance stops discarding once earlier traversals have spent it.
///
/// The countdown makes `Dropping` `!Send` and `!Sync`.
#[derive(Clone, Debug)]
pub struct Dropping {
    countdown: Countdown,
}

static_assertions::assert_not_impl_any!(Dropping: Send, Sync);

impl Dropping {
    /// Returns how many more elements this instance will discard.
    pub fn remaining(&self) -> usize {
        self.countdown.remaining()
    }
}

impl<In> Transducer<In> for Dropping {
    type Out = In;

    fn transform<Acc, R>(&self, mut reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, In>,
    {
        let countdown = self.countdown.clone();
        move |accumulator: Acc, item: In| {
            if countdown.is_exhausted() {
                reducer.step(accumulator, item)
            } else {
                countdown.spend();
                accumulator
            }
        }
    }
}

/// Creates a transducer that discards the first `count` elements it sees
/// and forwards every element after that.
///
/// As with [`take`](super::take), the quota belongs to the returned
/// instance: each call to `drop` seeds a fresh countdown, and reuse
/// across traversals keeps spending the same one. The countdown
/// decrements only when an element is discarded.
///
/// # Arguments
///
/// * `count` - How many elements to discard before forwarding
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &drop(2),
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![10, 20, 30, 40],
/// );
///
/// assert_eq!(collected, vec![30, 40]);
/// ```
///
/// ## `drop(0)` is pass-through
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &drop(0),
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2, 3],
/// );
///
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
#[inline]
pub fn drop(count: usize) -> Dropping {
    Dropping {
        countdown: Countdown::new(count),
    }
}
