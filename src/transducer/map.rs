//! The `map` transducer: apply a function to each element.

use super::Transducer;
use crate::reducing::Reducing;

/// The transducer built by [`map`].
///
/// Stateless: one `Mapping` value can wrap reducers for any number of
/// independent traversals, and cloning it clones only the function.
#[derive(Clone, Copy, Debug)]
pub struct Mapping<F> {
    function: F,
}

impl<In, Out, F> Transducer<In> for Mapping<F>
where
    F: Fn(In) -> Out + Clone,
{
    type Out = Out;

    fn transform<Acc, R>(&self, mut reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, Out>,
    {
        let function = self.function.clone();
        move |accumulator: Acc, item: In| reducer.step(accumulator, function(item))
    }
}

/// Creates a transducer that applies `function` to each element before
/// forwarding it downstream.
///
/// `function` must be total over the element type; if it panics, the
/// panic propagates out of the fold and the traversal is abandoned.
///
/// # Arguments
///
/// * `function` - The element transformation, `In -> Out`
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &map(|value: i32| value * 2),
///     |mut accumulator: Vec<i32>, element: i32| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2, 3],
/// );
///
/// assert_eq!(collected, vec![2, 4, 6]);
/// ```
///
/// ## Changing the element type
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &map(|value: i32| value.to_string()),
///     |mut accumulator: Vec<String>, element: String| {
///         accumulator.push(element);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2],
/// );
///
/// assert_eq!(collected, vec!["1".to_string(), "2".to_string()]);
/// ```
#[inline]
pub const fn map<F>(function: F) -> Mapping<F> {
    Mapping { function }
}
