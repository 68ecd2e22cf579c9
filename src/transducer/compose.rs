//! Binary transducer composition.

use super::Transducer;
use crate::reducing::Reducing;

/// The composition of two transducers.
///
/// `Compose::new(outer, inner)` is the transducer `outer ∘ inner`: when
/// applied to a base reducer it wraps with `inner` first and `outer`
/// last, so `outer` is the outermost wrapper. At reduction time each
/// element therefore flows through `outer`'s logic *first* — listing
/// order in [`compose!`](crate::compose) is per-element execution order.
///
/// The element types must line up: `outer` must emit what `inner`
/// consumes (`Outer::Out == Inner`'s input). The compiler enforces this;
/// a mismatched pipeline is a type error at the `Compose` site.
///
/// Prefer the [`compose!`](crate::compose) macro for pipelines of more
/// than two stages; it nests `Compose` for you.
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// // Double first, then keep values above 2.
/// let pipeline = Compose::new(
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
#[derive(Clone, Copy, Debug)]
pub struct Compose<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Compose<Outer, Inner> {
    /// Composes two transducers, `outer` first per element.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }
}

impl<In, Outer, Inner> Transducer<In> for Compose<Outer, Inner>
where
    Outer: Transducer<In>,
    Inner: Transducer<Outer::Out>,
{
    type Out = Inner::Out;

    fn transform<Acc, R>(&self, reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, Inner::Out>,
    {
        self.outer.transform(self.inner.transform(reducer))
    }
}
