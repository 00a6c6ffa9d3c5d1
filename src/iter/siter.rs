use std::fmt;
use std::hash::Hash;

use super::cursor::{
    Cursor, EachCursor, FilterCursor, FlatCursor, Generator, MapCursor, Source, Stepper,
};
use crate::collection::{Slist, Sset};
use crate::error::{SugarError, SugarResult};
use crate::value::Opt;

/// A lazy, single-pass iterator with an idempotent [`has_next`](Self::has_next).
///
/// No transformation runs until an element is pulled. Every pulled element
/// passes through the chain exactly once.
///
/// # Examples
///
/// ```rust
/// use indolent::iter::SIter;
///
/// let mut words = SIter::of(["alpha", "", "beta"])
///     .filter(|word| !word.is_empty())
///     .map(str::to_uppercase);
///
/// assert!(words.has_next());
/// assert!(words.has_next());
/// assert_eq!(words.pull(), Ok(String::from("ALPHA")));
/// assert_eq!(words.list().into_vec(), vec![String::from("BETA")]);
/// ```
pub struct SIter<C> {
    cursor: C,
}

impl<I: Iterator> SIter<Source<I>> {
    /// Wraps any iterable.
    #[inline]
    pub fn of<J>(iterable: J) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        Self {
            cursor: Source::new(iterable.into_iter()),
        }
    }
}

impl<E, H, N> SIter<Generator<E, H, N>> {
    /// Builds an iterator from an environment, a continuation condition and
    /// a step that produces the next element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::iter::SIter;
    ///
    /// let powers = SIter::generate(1_u32, |n| *n <= 16, |n| {
    ///     let current = *n;
    ///     *n *= 2;
    ///     current
    /// });
    /// assert_eq!(powers.list().into_vec(), vec![1, 2, 4, 8, 16]);
    /// ```
    #[inline]
    pub fn generate<T>(environment: E, condition: H, step: N) -> Self
    where
        H: FnMut(&E) -> bool,
        N: FnMut(&mut E) -> T,
    {
        Self {
            cursor: Generator::new(environment, condition, step),
        }
    }
}

impl SIter<Stepper> {
    /// Counts from `from` to `to`, both inclusive, by one.
    ///
    /// Counts down when `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::iter::SIter;
    ///
    /// assert_eq!(SIter::range(1, 3).list().into_vec(), vec![1, 2, 3]);
    /// assert_eq!(SIter::range(3, 1).list().into_vec(), vec![3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn range(from: i64, to: i64) -> Self {
        Self::stepping(from, to, 1)
    }

    /// Counts from `from` towards `to` (inclusive) by `step`.
    ///
    /// `step` is a magnitude; the direction follows from `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IllegalArgument`] when `step` is not positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::iter::SIter;
    ///
    /// let odds = SIter::range_by(1, 6, 2).unwrap();
    /// assert_eq!(odds.list().into_vec(), vec![1, 3, 5]);
    /// assert!(SIter::range_by(1, 6, 0).is_err());
    /// ```
    pub fn range_by(from: i64, to: i64, step: i64) -> SugarResult<Self> {
        Self::positive(step).map(|step| Self::stepping(from, to, step))
    }

    /// Counts up from `from` without an upper bound short of `i64::MAX`.
    #[inline]
    #[must_use]
    pub const fn sequence(from: i64) -> Self {
        Self::stepping(from, i64::MAX, 1)
    }

    /// Counts up from `from` by `step` until `i64::MAX` would be passed.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IllegalArgument`] when `step` is not positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::iter::SIter;
    ///
    /// let tens: Vec<i64> = Iterator::take(SIter::sequence_by(0, 10).unwrap(), 3).collect();
    /// assert_eq!(tens, vec![0, 10, 20]);
    /// ```
    pub fn sequence_by(from: i64, step: i64) -> SugarResult<Self> {
        Self::positive(step).map(|step| Self::stepping(from, i64::MAX, step))
    }

    const fn stepping(from: i64, to: i64, step: i64) -> Self {
        let stride = if to < from { -step } else { step };
        Self {
            cursor: Stepper::new(from, to, stride),
        }
    }

    fn positive(step: i64) -> SugarResult<i64> {
        if step > 0 {
            Ok(step)
        } else {
            tracing::trace!(step, "step rejected");
            Err(SugarError::illegal_argument("step", format!("(step = {step}) <= 0")))
        }
    }
}

impl<C: Cursor> SIter<C> {
    /// Returns `true` when another element can be pulled.
    ///
    /// Asking repeatedly neither skips nor duplicates elements.
    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    /// Pulls the next element.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::NoSuchElement`] when the iterator is exhausted.
    #[inline]
    pub fn pull(&mut self) -> SugarResult<C::Item> {
        self.cursor.next().ok_or(SugarError::NoSuchElement)
    }

    // =========================================================================
    // Lazy adapters
    // =========================================================================

    /// Transforms each element as it is pulled.
    #[inline]
    pub fn map<B, F>(self, function: F) -> SIter<MapCursor<C, F>>
    where
        F: FnMut(C::Item) -> B,
    {
        SIter {
            cursor: MapCursor::new(self.cursor, function),
        }
    }

    /// Keeps only the elements matching `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> SIter<FilterCursor<C, P>>
    where
        P: FnMut(&C::Item) -> bool,
    {
        SIter {
            cursor: FilterCursor::new(self.cursor, predicate),
        }
    }

    /// Alias of [`filter`](Self::filter).
    #[inline]
    pub fn take<P>(self, predicate: P) -> SIter<FilterCursor<C, P>>
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.filter(predicate)
    }

    /// Expands each element into an iterable and yields its contents.
    ///
    /// Upstream elements are only pulled when the current inner iterator is
    /// drained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::iter::SIter;
    ///
    /// let letters = SIter::of(["", "ab", "c"]).flat(|word: &str| word.chars().collect::<Vec<_>>());
    /// assert_eq!(letters.list().into_vec(), vec!['a', 'b', 'c']);
    /// ```
    #[inline]
    pub fn flat<J, F>(self, function: F) -> SIter<FlatCursor<C, F, J>>
    where
        F: FnMut(C::Item) -> J,
        J: IntoIterator,
    {
        SIter {
            cursor: FlatCursor::new(self.cursor, function),
        }
    }

    /// Alias of [`flat`](Self::flat).
    #[inline]
    pub fn flat_map<J, F>(self, function: F) -> SIter<FlatCursor<C, F, J>>
    where
        F: FnMut(C::Item) -> J,
        J: IntoIterator,
    {
        self.flat(function)
    }

    /// Runs `action` on each element as it is pulled.
    #[inline]
    pub fn each<F>(self, action: F) -> SIter<EachCursor<C, F>>
    where
        F: FnMut(&C::Item),
    {
        SIter {
            cursor: EachCursor::new(self.cursor, action),
        }
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Collects the remaining elements into a list.
    #[inline]
    pub fn list(self) -> Slist<C::Item> {
        self.collect()
    }

    /// Collects the remaining elements into a set built by the current factory.
    #[inline]
    pub fn set(self) -> Sset<C::Item>
    where
        C::Item: Eq + Hash,
    {
        self.collect()
    }

    /// Returns `true` when any remaining element matches `predicate`.
    pub fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.cursor.any(|element| predicate(&element))
    }

    /// Returns `true` when every remaining element matches `predicate`.
    pub fn every<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.cursor.all(|element| predicate(&element))
    }

    /// Counts the remaining elements matching `predicate`.
    pub fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.cursor.filter(|element| predicate(element)).count()
    }

    /// Returns the next element, if any.
    #[inline]
    pub fn first(mut self) -> Opt<C::Item> {
        Opt::from(self.cursor.next())
    }

    /// Drains the iterator and returns the last element, if any.
    #[inline]
    pub fn last(self) -> Opt<C::Item> {
        Opt::from(self.cursor.last())
    }

    /// Renders the remaining elements separated by `separator`.
    pub fn join(self, separator: &str) -> String
    where
        C::Item: fmt::Display,
    {
        let mut joined = String::new();
        for (index, element) in self.cursor.enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }
}

impl<C: Cursor> Iterator for SIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C: Cursor> Cursor for SIter<C> {
    #[inline]
    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }
}

impl<C> fmt::Debug for SIter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SIter").finish_non_exhaustive()
    }
}

/// Extension trait turning any iterator into an [`SIter`].
///
/// # Examples
///
/// ```rust
/// use indolent::iter::IteratorExt;
///
/// let total = (1..=4).sugar().filter(|n| n % 2 == 0).count_where(|_| true);
/// assert_eq!(total, 2);
/// ```
pub trait IteratorExt: Iterator + Sized {
    /// Wraps the iterator.
    fn sugar(self) -> SIter<Source<Self>> {
        SIter::of(self)
    }
}

impl<I: Iterator> IteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn test_non_positive_step_is_rejected(#[case] step: i64) {
        assert!(matches!(
            SIter::range_by(0, 10, step),
            Err(SugarError::IllegalArgument { name: "step", .. })
        ));
        assert!(SIter::sequence_by(0, step).is_err());
    }

    #[rstest]
    fn test_pull_on_exhausted_fails() {
        let mut empty = SIter::of(Vec::<i32>::new());
        assert!(!empty.has_next());
        assert_eq!(empty.pull(), Err(SugarError::NoSuchElement));
    }

    #[rstest]
    fn test_map_runs_once_per_pulled_element() {
        let mut calls = 0;
        let doubled: Vec<i32> = SIter::of([1, 2, 3])
            .map(|n| {
                calls += 1;
                n * 2
            })
            .collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn test_each_observes_lazily() {
        let mut seen = Vec::new();
        let first = SIter::of([1, 2, 3]).each(|n| seen.push(*n)).first();
        assert_eq!(first, Opt::of(1));
        assert_eq!(seen, vec![1]);
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&[1], "1")]
    #[case(&[1, 2, 3], "1, 2, 3")]
    fn test_join(#[case] input: &[i32], #[case] expected: &str) {
        assert_eq!(SIter::of(input).join(", "), expected);
    }

    #[rstest]
    fn test_any_every_last() {
        assert!(SIter::of([1, 2, 3]).any(|n| *n == 2));
        assert!(SIter::of([2, 4]).every(|n| n % 2 == 0));
        assert_eq!(SIter::of([1, 2, 3]).last(), Opt::of(3));
    }
}
