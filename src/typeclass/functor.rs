//! Functor type class: mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! let lengths = slist!["a", "bcd"].fmap(str::len);
//! assert_eq!(lengths, slist![1, 3]);
//!
//! let absent: Opt<i32> = Opt::none();
//! assert_eq!(absent.fmap(|n| n + 1), Opt::none());
//! ```

use super::higher::TypeConstructor;
use crate::collection::Slist;
use crate::value::Opt;

/// A type class for containers whose contents can be mapped.
///
/// `function` is `FnMut` because multi-element containers call it once per
/// element.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value, preserving the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference of every value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// assert_eq!(Opt::of(5).replace("five"), Opt::of("five"));
    /// assert_eq!(slist![1, 2].replace('x'), slist!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards every value, keeping the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Opt<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Opt<B>
    where
        F: FnMut(A) -> B,
    {
        Opt::from(self.into_option().map(function))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Opt<B>
    where
        F: FnMut(&A) -> B,
    {
        Opt::from(self.as_ref().into_option().map(function))
    }
}

impl<T> Functor for Slist<T> {
    fn fmap<B, F>(self, function: F) -> Slist<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Slist<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_slice().iter().map(function).collect()
    }
}
