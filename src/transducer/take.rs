//! The `take` transducer: forward the first `n` elements, then discard.

use super::Transducer;
use super::countdown::Countdown;
use crate::reducing::Reducing;

/// The transducer built by [`take`].
///
/// Stateful: a `Taking` owns a private countdown, seeded once at
/// construction and spent as elements are forwarded. Every reducing step
/// built from the same `Taking` — including through [`Clone`], which
/// shares rather than copies the countdown — draws on that one quota.
/// Construct a fresh `take(n)` per traversal unless the carry-over is
/// wanted.
///
/// The countdown makes `Taking` `!Send` and `!Sync`; transducers are
/// single-threaded values.
#[derive(Clone, Debug)]
pub struct Taking {
    countdown: Countdown,
}

static_assertions::assert_not_impl_any!(Taking: Send, Sync);

impl Taking {
    /// Returns how many more elements this instance will forward.
    ///
    /// Read-only: the countdown can only be spent by reduction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xducers::prelude::*;
    ///
    /// let taking = take(2);
    /// assert_eq!(taking.remaining(), 2);
    ///
    /// let _ = transduce(
    ///     &taking,
    ///     |accumulator: i32, element: i32| accumulator + element,
    ///     0,
    ///     vec![1, 2, 3],
    /// );
    /// assert_eq!(taking.remaining(), 0);
    /// ```
    pub fn remaining(&self) -> usize {
        self.countdown.remaining()
    }
}

impl<In> Transducer<In> for Taking {
    type Out = In;

    fn transform<Acc, R>(&self, mut reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, In>,
    {
        let countdown = self.countdown.clone();
        move |accumulator: Acc, item: In| {
            if countdown.is_exhausted() {
                accumulator
            } else {
                countdown.spend();
                reducer.step(accumulator, item)
            }
        }
    }
}

/// Creates a transducer that forwards the first `count` elements it sees
/// and silently discards every element after that.
///
/// The quota belongs to the returned instance, not to any one traversal:
/// each call to `take` seeds a fresh countdown, and the same instance
/// reused across traversals keeps spending the same countdown (see the
/// second example). The countdown decrements only when an element is
/// forwarded.
///
/// Exhaustion does not stop the fold: [`transduce`](super::transduce)
/// still visits every remaining element, each one passing through the
/// exhausted step untouched. Cost is O(input length) regardless of
/// `count`.
///
/// # Arguments
///
/// * `count` - How many elements to forward before discarding
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &take(2),
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![10, 20, 30, 40],
/// );
///
/// assert_eq!(collected, vec![10, 20]);
/// ```
///
/// ## Reuse carries the countdown over
///
/// ```rust
/// use xducers::prelude::*;
///
/// fn push(mut accumulator: Vec<i32>, element: i32) -> Vec<i32> {
///     accumulator.push(element);
///     accumulator
/// }
///
/// let taking = take(2);
///
/// let first = transduce(&taking, push, Vec::new(), vec![1, 2, 3]);
/// assert_eq!(first, vec![1, 2]);
///
/// // The quota was spent by the first traversal.
/// let second = transduce(&taking, push, Vec::new(), vec![4, 5, 6]);
/// assert_eq!(second, Vec::<i32>::new());
/// ```
#[inline]
pub fn take(count: usize) -> Taking {
    Taking {
        countdown: Countdown::new(count),
    }
}
