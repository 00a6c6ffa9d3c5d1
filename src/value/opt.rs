//! Optional-value wrapper.
//!
//! [`Opt`] is a thin, chainable wrapper around [`Option`]. It carries the
//! combinators the rest of the crate speaks in: lookups on lists and maps,
//! the first element of an iterator and the soft parse helpers all answer
//! with an `Opt`.
//!
//! # Examples
//!
//! ```rust
//! use indolent::value::Opt;
//!
//! let port = Opt::of("8080")
//!     .filter(|text| !text.is_empty())
//!     .flat_map(|text| Opt::from(text.parse::<u16>().ok()))
//!     .or(80);
//! assert_eq!(port, 8080);
//!
//! let missing: Opt<u16> = Opt::none();
//! assert_eq!(missing.map(|port| port + 1).or_else_get(|| 443), 443);
//! ```

use std::fmt;

use crate::error::{SugarError, SugarResult};
use crate::value::tuple::Tuple2;

/// An optional value: either absent or present with exactly one value.
///
/// Equality, ordering and hashing are structural: two absent values are
/// equal, and two present values are equal when their contents are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Opt<T>(Option<T>);

impl<T> Opt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// assert!(Opt::of(1).is_present());
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Wraps a standard [`Option`], mapping `None` to the absent value.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        Self(value)
    }

    /// Returns the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// let absent: Opt<i32> = Opt::none();
    /// assert!(absent.is_empty());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self(None)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` when a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` when no value is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` when a value is held and it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// assert!(Opt::of(4).test(|n| n % 2 == 0));
    /// assert!(!Opt::<i32>::none().test(|_| true));
    /// ```
    #[inline]
    pub fn test<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.0.as_ref().is_some_and(predicate)
    }

    /// Like [`test`](Self::test), but keeps absence distinct from a failed test.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// assert_eq!(Opt::of(3).test_opt(|n| *n > 5), Opt::of(false));
    /// assert_eq!(Opt::<i32>::none().test_opt(|n| *n > 5), Opt::none());
    /// ```
    #[inline]
    pub fn test_opt<P>(&self, predicate: P) -> Opt<bool>
    where
        P: FnOnce(&T) -> bool,
    {
        Opt(self.0.as_ref().map(predicate))
    }

    /// Returns `true` when the held value equals `other`.
    #[inline]
    pub fn eq_value(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.test(|value| value == other)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the held value. `function` runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// assert_eq!(Opt::of(2).map(|n| n * 10), Opt::of(20));
    /// assert_eq!(Opt::<i32>::none().map(|n| n * 10), Opt::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        Opt(self.0.map(function))
    }

    /// Applies a function that itself returns an `Opt`, flattening the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Opt::of(n / 2) } else { Opt::none() };
    /// assert_eq!(Opt::of(8).flat_map(half), Opt::of(4));
    /// assert_eq!(Opt::of(7).flat_map(half), Opt::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        Opt(self.0.and_then(|value| function(value).0))
    }

    /// Keeps the value only when it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Alias of [`filter`](Self::filter).
    #[inline]
    pub fn when<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }

    /// Replaces the held value with the result of `function`, unless that
    /// result is absent, in which case `self` is kept unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Opt;
    ///
    /// let halve = |n: &i32| if n % 2 == 0 { Opt::of(n / 2) } else { Opt::none() };
    /// assert_eq!(Opt::of(8).fold(halve), Opt::of(4));
    /// assert_eq!(Opt::of(7).fold(halve), Opt::of(7));
    /// ```
    pub fn fold<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Self,
    {
        match self.0.as_ref().map(function) {
            Some(replaced @ Self(Some(_))) => replaced,
            _ => self,
        }
    }

    /// Runs `action` on the held value and returns `self`.
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            action(value);
        }
        self
    }

    /// Runs `action` on the held value, or `otherwise` when absent.
    #[inline]
    pub fn tap_or<F, G>(self, action: F, otherwise: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.0 {
            Some(value) => action(value),
            None => otherwise(),
        }
        self
    }

    /// Pairs this value with `other` when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::{Opt, Tuple2};
    ///
    /// assert_eq!(Opt::of(1).and(Opt::of("a")), Opt::of(Tuple2::new(1, "a")));
    /// assert_eq!(Opt::of(1).and(Opt::<&str>::none()), Opt::none());
    /// ```
    #[inline]
    pub fn and<S>(self, other: Opt<S>) -> Opt<Tuple2<T, S>> {
        Opt(self.0.zip(other.0).map(Tuple2::from))
    }

    /// Like [`and`](Self::and), but `supplier` only runs when `self` is present.
    #[inline]
    pub fn and_with<S, F>(self, supplier: F) -> Opt<Tuple2<T, S>>
    where
        F: FnOnce() -> Opt<S>,
    {
        match self.0 {
            Some(value) => supplier().map(|other| Tuple2::new(value, other)),
            None => Opt::none(),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the held value, or `fallback` when absent.
    #[inline]
    pub fn or(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// Alias of [`or`](Self::or).
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        self.or(fallback)
    }

    /// Returns the held value, or the result of `supplier` when absent.
    ///
    /// `supplier` is not evaluated when a value is held.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// Returns `self` when present, otherwise `other`.
    #[inline]
    pub fn or_opt(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }

    /// Returns `self` when present, otherwise the result of `supplier`.
    #[inline]
    pub fn or_opt_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        Self(self.0.or_else(|| supplier().0))
    }

    /// Returns the held value or fails with [`SugarError::Absent`].
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::Absent`] when no value is held.
    #[inline]
    pub fn or_fail(self) -> SugarResult<T> {
        self.0.ok_or(SugarError::Absent)
    }

    /// Returns the held value or fails with the error built by `error`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error` when no value is held.
    #[inline]
    pub fn or_fail_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.0.ok_or_else(error)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        Opt(self.0.as_ref())
    }

    /// Unwraps into the standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Iterates over the held value (zero or one element).
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Clone> Opt<&T> {
    /// Maps an `Opt<&T>` to an `Opt<T>` by cloning the contents.
    #[inline]
    pub fn cloned(self) -> Opt<T> {
        Opt(self.0.cloned())
    }
}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(value: Opt<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(formatter, "Opt({value})"),
            None => write!(formatter, "Opt<empty>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_runs_at_most_once() {
        let mut calls = 0;
        let result = Opt::of(5).map(|n| {
            calls += 1;
            n + 1
        });
        assert_eq!(result, Opt::of(6));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_or_else_get_skips_supplier_when_present() {
        let mut called = false;
        let value = Opt::of(1).or_else_get(|| {
            called = true;
            2
        });
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[rstest]
    #[case(Opt::of(1), "Opt(1)")]
    #[case(Opt::none(), "Opt<empty>")]
    fn test_display(#[case] value: Opt<i32>, #[case] expected: &str) {
        assert_eq!(format!("{value}"), expected);
    }

    #[rstest]
    fn test_absent_values_are_equal_and_ordered_first() {
        assert_eq!(Opt::<i32>::none(), Opt::default());
        assert!(Opt::<i32>::none() < Opt::of(i32::MIN));
    }

    #[rstest]
    fn test_and_with_skips_supplier_when_absent() {
        let mut called = false;
        let paired = Opt::<i32>::none().and_with(|| {
            called = true;
            Opt::of(1)
        });
        assert_eq!(paired, Opt::none());
        assert!(!called);
    }

    #[rstest]
    fn test_tap_or_runs_fallback_branch() {
        let seen = std::cell::RefCell::new(Vec::new());
        let _ = Opt::<i32>::none().tap_or(|n| seen.borrow_mut().push(*n), || seen.borrow_mut().push(-1));
        let _ = Opt::of(3).tap_or(|n| seen.borrow_mut().push(*n), || seen.borrow_mut().push(-1));
        assert_eq!(seen.into_inner(), vec![-1, 3]);
    }

    #[rstest]
    fn test_or_fail_with_custom_error() {
        let result: Result<i32, &str> = Opt::none().or_fail_with(|| "missing");
        assert_eq!(result, Err("missing"));
    }

    #[rstest]
    fn test_iterates_zero_or_one() {
        assert_eq!(Opt::of(9).into_iter().collect::<Vec<_>>(), vec![9]);
        assert_eq!(Opt::<i32>::none().iter().count(), 0);
    }
}
