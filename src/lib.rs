//! # xducers
//!
//! A minimal transducer library for Rust providing composable,
//! collection-agnostic data transformations.
//!
//! ## Overview
//!
//! A *reducing function* is a fold step `(accumulator, element) ->
//! accumulator`. A *transducer* transforms one reducing function into
//! another, without caring what the reducing function does, what the
//! accumulator type is, or where the elements come from. Because
//! transducers are just reducing-function transformers, they chain via
//! ordinary function composition, and a whole pipeline collapses into a
//! single fold step.
//!
//! The library provides:
//!
//! - **[`Reducing`]**: the reducing-function contract, implemented by
//!   every `FnMut(Acc, Item) -> Acc` closure out of the box
//! - **[`Transducer`]**: the reducing-function transformer contract
//! - **Stateless transducers**: [`map`], [`filter`]
//! - **Stateful transducers**: [`take`], [`drop`], which carry a private
//!   countdown across elements of a traversal
//! - **Composition**: [`compose!`], [`Compose`], [`Identity`]
//! - **[`transduce`]**: the driver that folds a transformed reducer over
//!   any `IntoIterator`
//!
//! Everything is generic and monomorphized: composing transducers builds
//! a nest of concrete structs, not a chain of boxed closures.
//!
//! ## Example
//!
//! ```rust
//! use xducers::prelude::*;
//!
//! let pipeline = compose!(
//!     filter(|value: &i32| value % 2 == 0),
//!     map(|value: i32| value * 10),
//!     take(2),
//! );
//!
//! let collected = transduce(
//!     &pipeline,
//!     |mut accumulator: Vec<i32>, element: i32| {
//!         accumulator.push(element);
//!         accumulator
//!     },
//!     Vec::new(),
//!     1..=6,
//! );
//!
//! assert_eq!(collected, vec![20, 40]);
//! ```
//!
//! ## Evaluation order
//!
//! [`compose!`] is right-to-left function composition, which means the
//! *leftmost* transducer in the list is the outermost wrapper and its
//! logic runs *first* on each element. In the example above every element
//! is filtered, then mapped, then counted against the `take` quota —
//! the same order the transducers are listed.
//!
//! ## No short-circuiting
//!
//! [`transduce`] always scans its entire input, even after [`take`] has
//! exhausted its quota; exhausted steps simply return the accumulator
//! untouched. Cost is O(input length) regardless of the quota. See
//! [`take`] for details.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use xducers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::reducing::*;

    pub use crate::transducer::*;
}

pub mod reducing;

pub mod transducer;

pub use reducing::Reducing;
pub use transducer::{
    Compose, Dropping, Filtering, Identity, Mapping, Taking, Transducer, drop, filter, identity,
    map, take, transduce,
};
