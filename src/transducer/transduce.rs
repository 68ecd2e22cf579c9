//! The driver: fold a transformed reducer over an input.

use super::Transducer;
use crate::reducing::Reducing;

/// Applies a transducer to a base reducer and folds the result over an
/// input, returning the final accumulator.
///
/// The fold is a strict left fold: elements are visited exactly once, in
/// order, each step completing before the next begins. It never
/// short-circuits — even when a [`take`](super::take) stage has
/// exhausted its quota the remaining elements are still visited, each
/// passing through the exhausted step untouched.
///
/// The transducer is borrowed, not consumed, so one value can drive many
/// traversals. For the stateless transducers that is always safe; for
/// [`take`](super::take)/[`drop`](super::drop) the private countdown
/// carries over between traversals (see their docs).
///
/// # Arguments
///
/// * `transducer` - The (possibly composed) transducer to apply
/// * `reducer` - The base reducing function; any
///   `FnMut(Acc, Out) -> Acc` closure works
/// * `seed` - The initial accumulator
/// * `input` - The elements to fold, any [`IntoIterator`]
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let total = transduce(
///     &map(|value: i32| value * value),
///     |accumulator: i32, element: i32| accumulator + element,
///     0,
///     1..=4,
/// );
///
/// // 1 + 4 + 9 + 16
/// assert_eq!(total, 30);
/// ```
///
/// ## The accumulator type is the caller's business
///
/// ```rust
/// use xducers::prelude::*;
///
/// let joined = transduce(
///     &filter(|word: &&str| word.len() > 3),
///     |mut accumulator: String, element: &str| {
///         accumulator.push_str(element);
///         accumulator
///     },
///     String::new(),
///     vec!["so", "long", "and", "thanks"],
/// );
///
/// assert_eq!(joined, "longthanks");
/// ```
pub fn transduce<In, T, Acc, R, I>(transducer: &T, reducer: R, seed: Acc, input: I) -> Acc
where
    T: Transducer<In>,
    R: Reducing<Acc, T::Out>,
    I: IntoIterator<Item = In>,
{
    let mut step = transducer.transform(reducer);
    input
        .into_iter()
        .fold(seed, |accumulator, item| step.step(accumulator, item))
}
