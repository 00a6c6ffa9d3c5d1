//! Positional tuple types.
//!
//! [`Tuple2`] and [`Tuple3`] are immutable records with positional getters,
//! `with_*` copy methods and rearrangements. [`MutTuple2`] and [`MutTuple3`]
//! are their mutable counterparts whose setters mutate in place and return
//! `&mut Self` for chaining.
//!
//! # Examples
//!
//! ```rust
//! use indolent::value::{Tuple2, Tuple3};
//!
//! let pair = Tuple2::new("port", 8080);
//! assert_eq!(pair.swap(), Tuple2::new(8080, "port"));
//!
//! let triple = Tuple3::new(1, 'b', "c");
//! assert_eq!(triple.rotate(), Tuple3::new("c", 1, 'b'));
//! assert_eq!(triple.outer(), Tuple2::new(1, "c"));
//! ```

use std::fmt;

// =============================================================================
// Tuple2
// =============================================================================

/// An immutable pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple2<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple2<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first element.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second element.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Returns a copy with the first element replaced.
    #[inline]
    pub fn with_first<C>(self, first: C) -> Tuple2<C, B> {
        Tuple2::new(first, self.second)
    }

    /// Returns a copy with the second element replaced.
    #[inline]
    pub fn with_second<C>(self, second: C) -> Tuple2<A, C> {
        Tuple2::new(self.first, second)
    }

    /// Exchanges the two positions.
    #[inline]
    pub fn swap(self) -> Tuple2<B, A> {
        Tuple2::new(self.second, self.first)
    }

    /// Appends a third element.
    #[inline]
    pub fn expand<C>(self, third: C) -> Tuple3<A, B, C> {
        Tuple3::new(self.first, self.second, third)
    }

    /// Transforms each position independently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Tuple2;
    ///
    /// let mapped = Tuple2::new(2, "ab").map(|n| n * 10, str::len);
    /// assert_eq!(mapped, Tuple2::new(20, 2));
    /// ```
    #[inline]
    pub fn map<C, D, F, G>(self, map_first: F, map_second: G) -> Tuple2<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Tuple2::new(map_first(self.first), map_second(self.second))
    }

    /// Transforms both positions at once.
    #[inline]
    pub fn remap<C, D, F>(self, function: F) -> Tuple2<C, D>
    where
        F: FnOnce(A, B) -> (C, D),
    {
        function(self.first, self.second).into()
    }

    /// Tests both positions with a two-argument predicate.
    #[inline]
    pub fn test<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A, &B) -> bool,
    {
        predicate(&self.first, &self.second)
    }

    /// Runs `action` on both positions and returns `self`.
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&A, &B),
    {
        action(&self.first, &self.second);
        self
    }

    /// Converts into the mutable variant.
    #[inline]
    pub fn to_mut(self) -> MutTuple2<A, B> {
        MutTuple2 {
            first: self.first,
            second: self.second,
        }
    }

    /// Unwraps into a Rust tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple2<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Tuple2<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple2<A, B>) -> Self {
        tuple.into_parts()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Tuple2<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

// =============================================================================
// Tuple3
// =============================================================================

/// An immutable triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Tuple3<A, B, C> {
    /// Creates a triple.
    #[inline]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Returns the first element.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second element.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Returns the third element.
    #[inline]
    pub const fn third(&self) -> &C {
        &self.third
    }

    /// Returns a copy with the first element replaced.
    #[inline]
    pub fn with_first<D>(self, first: D) -> Tuple3<D, B, C> {
        Tuple3::new(first, self.second, self.third)
    }

    /// Returns a copy with the second element replaced.
    #[inline]
    pub fn with_second<D>(self, second: D) -> Tuple3<A, D, C> {
        Tuple3::new(self.first, second, self.third)
    }

    /// Returns a copy with the third element replaced.
    #[inline]
    pub fn with_third<D>(self, third: D) -> Tuple3<A, B, D> {
        Tuple3::new(self.first, self.second, third)
    }

    /// Returns the first two positions.
    #[inline]
    pub fn first_two(self) -> Tuple2<A, B> {
        Tuple2::new(self.first, self.second)
    }

    /// Returns the last two positions.
    #[inline]
    pub fn last_two(self) -> Tuple2<B, C> {
        Tuple2::new(self.second, self.third)
    }

    /// Returns the first and the last position.
    #[inline]
    pub fn outer(self) -> Tuple2<A, C> {
        Tuple2::new(self.first, self.third)
    }

    /// Reverses the order of the positions: `(3, 2, 1)`.
    #[inline]
    pub fn reverse(self) -> Tuple3<C, B, A> {
        Tuple3::new(self.third, self.second, self.first)
    }

    /// Moves the last position to the front: `(3, 1, 2)`.
    #[inline]
    pub fn rotate(self) -> Tuple3<C, A, B> {
        Tuple3::new(self.third, self.first, self.second)
    }

    /// Transforms each position independently.
    #[inline]
    pub fn map<D, E, G, F1, F2, F3>(self, map_first: F1, map_second: F2, map_third: F3) -> Tuple3<D, E, G>
    where
        F1: FnOnce(A) -> D,
        F2: FnOnce(B) -> E,
        F3: FnOnce(C) -> G,
    {
        Tuple3::new(
            map_first(self.first),
            map_second(self.second),
            map_third(self.third),
        )
    }

    /// Tests all positions with a three-argument predicate.
    #[inline]
    pub fn test<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A, &B, &C) -> bool,
    {
        predicate(&self.first, &self.second, &self.third)
    }

    /// Converts into the mutable variant.
    #[inline]
    pub fn to_mut(self) -> MutTuple3<A, B, C> {
        MutTuple3 {
            first: self.first,
            second: self.second,
            third: self.third,
        }
    }

    /// Unwraps into a Rust tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for Tuple3<A, B, C> {
    #[inline]
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}

impl<A, B, C> From<Tuple3<A, B, C>> for (A, B, C) {
    #[inline]
    fn from(tuple: Tuple3<A, B, C>) -> Self {
        tuple.into_parts()
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Tuple3<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {}, {})", self.first, self.second, self.third)
    }
}

// =============================================================================
// Mutable variants
// =============================================================================

/// A mutable pair whose setters chain.
///
/// # Examples
///
/// ```rust
/// use indolent::value::{MutTuple2, Tuple2};
///
/// let mut pair = MutTuple2::new(0, "zero");
/// pair.set_first(1).set_second("one");
/// assert_eq!(pair.freeze(), Tuple2::new(1, "one"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MutTuple2<A, B> {
    /// The first element.
    pub first: A,
    /// The second element.
    pub second: B,
}

impl<A, B> MutTuple2<A, B> {
    /// Creates a mutable pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Replaces the first element in place.
    #[inline]
    pub fn set_first(&mut self, first: A) -> &mut Self {
        self.first = first;
        self
    }

    /// Replaces the second element in place.
    #[inline]
    pub fn set_second(&mut self, second: B) -> &mut Self {
        self.second = second;
        self
    }

    /// Replaces both elements in place.
    #[inline]
    pub fn set(&mut self, first: A, second: B) -> &mut Self {
        self.first = first;
        self.second = second;
        self
    }

    /// Exchanges the two positions, producing a new pair.
    #[inline]
    pub fn swap(self) -> MutTuple2<B, A> {
        MutTuple2::new(self.second, self.first)
    }

    /// Transforms each position independently.
    #[inline]
    pub fn map<C, D, F, G>(self, map_first: F, map_second: G) -> MutTuple2<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        MutTuple2::new(map_first(self.first), map_second(self.second))
    }

    /// Converts into the immutable variant.
    #[inline]
    pub fn freeze(self) -> Tuple2<A, B> {
        Tuple2::new(self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for MutTuple2<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for MutTuple2<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

/// A mutable triple whose setters chain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MutTuple3<A, B, C> {
    /// The first element.
    pub first: A,
    /// The second element.
    pub second: B,
    /// The third element.
    pub third: C,
}

impl<A, B, C> MutTuple3<A, B, C> {
    /// Creates a mutable triple.
    #[inline]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Replaces the first element in place.
    #[inline]
    pub fn set_first(&mut self, first: A) -> &mut Self {
        self.first = first;
        self
    }

    /// Replaces the second element in place.
    #[inline]
    pub fn set_second(&mut self, second: B) -> &mut Self {
        self.second = second;
        self
    }

    /// Replaces the third element in place.
    #[inline]
    pub fn set_third(&mut self, third: C) -> &mut Self {
        self.third = third;
        self
    }

    /// Replaces the first two elements from a pair.
    #[inline]
    pub fn set_first_two(&mut self, pair: Tuple2<A, B>) -> &mut Self {
        (self.first, self.second) = pair.into_parts();
        self
    }

    /// Replaces the last two elements from a pair.
    #[inline]
    pub fn set_last_two(&mut self, pair: Tuple2<B, C>) -> &mut Self {
        (self.second, self.third) = pair.into_parts();
        self
    }

    /// Converts into the immutable variant.
    #[inline]
    pub fn freeze(self) -> Tuple3<A, B, C> {
        Tuple3::new(self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for MutTuple3<A, B, C> {
    #[inline]
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}
