//! Transducers: reducing-function transformers.
//!
//! A transducer takes one reducing function and returns another, wrapping
//! it. The wrapper may transform each element before forwarding
//! ([`map`]), forward selectively ([`filter`]), or consult private state
//! to decide ([`take`], [`drop`]) — but it never inspects the accumulator
//! and never cares where elements come from. That indifference is what
//! makes transducers compose: a pipeline of transformations collapses
//! into a single reducing function via ordinary function composition.
//!
//! # Overview
//!
//! The module provides:
//!
//! - [`Transducer`]: the transformer contract
//! - [`map`] / [`Mapping`]: apply a function to each element
//! - [`filter`] / [`Filtering`]: forward only elements matching a predicate
//! - [`take`] / [`Taking`]: forward the first `n` elements, then discard
//! - [`drop`] / [`Dropping`]: discard the first `n` elements, then forward
//! - [`identity`] / [`Identity`]: the pass-through transducer
//! - [`Compose`] and the [`compose!`] macro: right-to-left composition
//! - [`transduce`]: fold a transformed reducer over an input
//!
//! # Laws
//!
//! Composition of transducers satisfies the monoid laws up to observable
//! behavior (the nesting of [`Compose`] values differs, the reduction
//! they perform does not):
//!
//! - **Associativity**:
//!   `compose!(compose!(f, g), h) == compose!(f, compose!(g, h))`
//! - **Left Identity**: `compose!(identity(), f) == f`
//! - **Right Identity**: `compose!(f, identity()) == f`
//!
//! # Statelessness and state
//!
//! [`Mapping`] and [`Filtering`] retain nothing between elements; one
//! value can drive any number of independent traversals. [`Taking`] and
//! [`Dropping`] own a private countdown that is shared by every reducing
//! step built from the same value — reusing one across traversals
//! carries the countdown over. See [`take`] for the hazard and [`Taking`]
//! for inspection.

mod compose;
mod compose_macro;
mod countdown;
mod drop;
mod filter;
mod identity;
mod map;
mod take;
mod transduce;

pub use compose::Compose;
pub use drop::{Dropping, drop};
pub use filter::{Filtering, filter};
pub use identity::{Identity, identity};
pub use map::{Mapping, map};
pub use take::{Taking, take};
pub use transduce::transduce;

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::compose;

use crate::reducing::Reducing;

/// A reducing-function transformer.
///
/// A `Transducer<In>` turns a reducing function over elements of type
/// [`Self::Out`] into a reducing function over elements of type `In`,
/// for any accumulator type. The accumulator stays generic in
/// [`transform`](Transducer::transform) precisely because transducers
/// must not care about the context of use.
///
/// # Type Parameters
///
/// * `In` - The element type the *transformed* reducer accepts
/// * [`Self::Out`] - The element type the *wrapped* (inner) reducer
///   receives
///
/// For [`map`] these differ (`In` before the function, `Out` after); for
/// [`filter`], [`take`] and [`drop`] they coincide.
///
/// # Purity
///
/// `transform` borrows the transducer and never mutates the reducer it
/// is given — it only moves it into the wrapper it builds. A transducer
/// value may itself carry internal mutable state (see [`Taking`]); that
/// state is shared by every wrapper built from the same value.
///
/// # Examples
///
/// ```rust
/// use xducers::reducing::Reducing;
/// use xducers::transducer::{Transducer, map};
///
/// let doubling = map(|value: i32| value * 2);
/// let mut step = doubling.transform(|accumulator: i32, element: i32| {
///     accumulator + element
/// });
///
/// // The transformed step doubles before it adds.
/// assert_eq!(step.step(0, 5), 10);
/// ```
pub trait Transducer<In> {
    /// The element type handed to the wrapped reducer.
    type Out;

    /// Wraps a reducing function, producing the transformed one.
    ///
    /// # Arguments
    ///
    /// * `reducer` - The downstream reducing function to wrap
    ///
    /// # Returns
    ///
    /// A reducing function over `In` that forwards (possibly transformed,
    /// possibly selectively) to `reducer`.
    fn transform<Acc, R>(&self, reducer: R) -> impl Reducing<Acc, In>
    where
        R: Reducing<Acc, Self::Out>;
}
