//! Foldable type class: reducing a structure to a summary value.
//!
//! # Laws
//!
//! ## Consistency with `into_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.into_list().fold_left(init, f)
//! ```
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For an associative `f` with identity `init`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```

use super::higher::TypeConstructor;
use crate::collection::{Pushable, Slist, Sset};
use crate::value::Opt;

/// A type class for structures that can be folded to a summary value.
///
/// Only `fold_left`, `fold_right` and `length` are required; the rest are
/// derived from them.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let words = slist!["fold", "me", "up"];
/// let joined = words.clone().fold_right(String::new(), |word, tail| format!("{word}/{tail}"));
/// assert_eq!(joined, "fold/me/up/");
///
/// let longest = words.reduce(|left, right| if right.len() > left.len() { right } else { left });
/// assert_eq!(longest, Opt::of("fold"));
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds from left to right.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Counts the elements.
    fn length(&self) -> usize;

    /// Returns `true` when there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Collects the elements into a list, in fold order.
    fn into_list(self) -> Slist<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Slist::new(), |mut list, element| {
            list.push(element);
            list
        })
    }

    /// Returns the first element matching `predicate`.
    fn find<P>(self, mut predicate: P) -> Opt<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(Opt::none(), |found, element| {
            if found.is_empty() && predicate(&element) {
                Opt::of(element)
            } else {
                found
            }
        })
    }

    /// Returns `true` when any element matches `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone().find(predicate).is_present()
    }

    /// Returns `true` when every element matches `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }

    /// Combines the elements pairwise from the left; absent when empty.
    fn reduce<F>(self, mut function: F) -> Opt<Self::Inner>
    where
        Self: Sized,
        F: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
    {
        self.fold_left(Opt::none(), |accumulated, element| {
            Opt::of(match accumulated.into_option() {
                Some(accumulated) => function(accumulated, element),
                None => element,
            })
        })
    }

    /// Maps every element then reduces the results; absent when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// let letters = slist!["ab", "cde"].map_reduce(|word| word.len(), |a, b| a + b);
    /// assert_eq!(letters, Opt::of(5));
    /// ```
    fn map_reduce<B, M, R>(self, mut map: M, mut reduce: R) -> Opt<B>
    where
        Self: Sized,
        M: FnMut(Self::Inner) -> B,
        R: FnMut(B, B) -> B,
    {
        self.fold_left(Opt::none(), |accumulated, element| {
            let mapped = map(element);
            Opt::of(match accumulated.into_option() {
                Some(accumulated) => reduce(accumulated, mapped),
                None => mapped,
            })
        })
    }
}

// =============================================================================
// Opt<A> Implementation
// =============================================================================

impl<A> Foldable for Opt<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self.into_option() {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self.into_option() {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }
}

// =============================================================================
// Slist<T> Implementation
// =============================================================================

impl<T> Foldable for Slist<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn into_list(self) -> Self {
        self
    }
}

// =============================================================================
// Sset<T> Implementation
// =============================================================================

impl<T> Foldable for Sset<T> {
    /// Folds in the set's iteration order.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}
