//! The `filter` transducer: forward only elements matching a predicate.

use super::Transducer;
use crate::reducing::Reducing;

/// The transducer built by [`filter`].
///
/// Stateless: one `Filtering` value can wrap reducers for any number of
/// independent traversals.
#[derive(Clone, Copy, Debug)]
pub struct Filtering<P> {
    predicate: P,
}

impl<In, P> Transducer<In> for Filtering<P>
where
    P: Fn(&In) -> bool + Clone,
{
    type Out = In;

    fn transform<Acc, R>(&self, mut reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, In>,
    {
        let predicate = self.predicate.clone();
        move |accumulator: Acc, item: In| {
            if predicate(&item) {
                reducer.step(accumulator, item)
            } else {
                accumulator
            }
        }
    }
}

/// Creates a transducer that forwards an element only when `predicate`
/// returns `true` for it; rejected elements leave the accumulator
/// untouched.
///
/// The predicate takes the element by reference, like
/// [`Iterator::filter`], so the element itself can still be forwarded
/// downstream after the test.
///
/// # Arguments
///
/// * `predicate` - The test, `&In -> bool`, total over the element type
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &filter(|value: &i32| value % 2 == 0),
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2, 3, 4],
/// );
///
/// assert_eq!(collected, vec![2, 4]);
/// ```
#[inline]
pub const fn filter<P>(predicate: P) -> Filtering<P> {
    Filtering { predicate }
}
