//! The reducing-function contract.
//!
//! A reducing function is a two-argument fold step: it takes the
//! accumulated value so far and one element, and returns the new
//! accumulated value. It is the foundational contract everything else in
//! this crate operates on or produces — transducers consume one reducing
//! function and build another, and [`transduce`](crate::transduce) folds
//! the final one over an input.
//!
//! A reducing function does not care about:
//!
//! - the context of use (the accumulator type `Acc`)
//! - the source of its elements
//! - whatever the downstream reducing function does
//!
//! # The `Reducing` trait
//!
//! [`Reducing<Acc, Item>`] has a single method, [`step`](Reducing::step).
//! It takes `&mut self` because reducing steps built by stateful
//! transducers ([`take`](crate::take), [`drop`](crate::drop)) mutate
//! captured state between elements.
//!
//! Every `FnMut(Acc, Item) -> Acc` is a `Reducing<Acc, Item>` through the
//! blanket implementation, so plain closures and `fn` items are reducing
//! functions with no wrapper type:
//!
//! ```rust
//! use xducers::reducing::Reducing;
//!
//! let mut sum = |accumulator: i32, element: i32| accumulator + element;
//! assert_eq!(sum.step(10, 5), 15);
//! ```

/// A two-argument fold step: `(accumulator, element) -> accumulator`.
///
/// This is the contract transducers transform. The accumulator is passed
/// by value and returned by value; a step that ignores its element simply
/// hands the accumulator back unchanged.
///
/// # Blanket implementation
///
/// Implemented for every `F: FnMut(Acc, Item) -> Acc`, so any closure or
/// function with the fold-step shape is already a reducing function:
///
/// ```rust
/// use xducers::reducing::Reducing;
///
/// fn push(mut accumulator: Vec<i32>, element: i32) -> Vec<i32> {
///     accumulator.push(element);
///     accumulator
/// }
///
/// let mut reducer = push;
/// let out = reducer.step(vec![1], 2);
/// assert_eq!(out, vec![1, 2]);
/// ```
///
/// # Side effects
///
/// The contract requires no side effects but forbids none; composition
/// must work regardless. A base reducer that counts its own invocations
/// is a perfectly valid reducing function.
pub trait Reducing<Acc, Item> {
    /// Folds one element into the accumulator.
    ///
    /// # Arguments
    ///
    /// * `accumulator` - The accumulated value so far
    /// * `item` - The element to fold in
    ///
    /// # Returns
    ///
    /// The new accumulated value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xducers::reducing::Reducing;
    ///
    /// let mut count = |accumulator: usize, _element: &str| accumulator + 1;
    /// let once = count.step(0, "a");
    /// let total = count.step(once, "b");
    /// assert_eq!(total, 2);
    /// ```
    fn step(&mut self, accumulator: Acc, item: Item) -> Acc;
}

impl<Acc, Item, F> Reducing<Acc, Item> for F
where
    F: FnMut(Acc, Item) -> Acc,
{
    fn step(&mut self, accumulator: Acc, item: Item) -> Acc {
        self(accumulator, item)
    }
}
