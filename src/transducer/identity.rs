//! The pass-through transducer, the unit of composition.

use super::Transducer;
use crate::reducing::Reducing;

/// The pass-through transducer.
///
/// Wrapping a reducer with `Identity` returns it unchanged, which makes
/// `Identity` the two-sided unit of transducer composition:
///
/// - `compose!(identity(), t)` behaves as `t`
/// - `compose!(t, identity())` behaves as `t`
/// - `compose!()` with no arguments *is* `Identity`
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let collected = transduce(
///     &Identity,
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
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<In> Transducer<In> for Identity {
    type Out = In;

    fn transform<Acc, R>(&self, reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, In>,
    {
        reducer
    }
}

/// Creates the pass-through transducer.
///
/// Equivalent to the unit value [`Identity`]; provided so the identity
/// transducer is constructed the same way as [`map`](super::map) and
/// friends.
///
/// # Examples
///
/// ```rust
/// use xducers::prelude::*;
///
/// let total = transduce(
///     &identity(),
///     |accumulator: i32, element: i32| accumulator + element,
///     0,
///     vec![1, 2, 3],
/// );
/// assert_eq!(total, 6);
/// ```
#[inline]
pub const fn identity() -> Identity {
    Identity
}
