//! Cursor adapters behind [`SIter`](super::SIter).
//!
//! A [`Cursor`] is an [`Iterator`] whose `has_next` can be asked any number
//! of times without skipping or duplicating elements. Adapters that need to
//! look ahead (filtering, flattening) buffer at most one element.

use std::iter::{Fuse, Peekable};

/// An iterator with an idempotent emptiness check.
///
/// # Laws
///
/// - Calling `has_next` twice in a row returns the same answer.
/// - `has_next() == true` implies the following `next()` returns `Some`.
/// - Once `has_next` returns `false` it keeps returning `false` (fused).
pub trait Cursor: Iterator {
    /// Returns `true` when another element can be pulled.
    fn has_next(&mut self) -> bool;
}

// =============================================================================
// Source
// =============================================================================

/// Plain source cursor over any iterator, buffering one element on peek.
pub struct Source<I: Iterator> {
    inner: Fuse<I>,
    buffered: Option<I::Item>,
}

impl<I: Iterator> Source<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner: inner.fuse(),
            buffered: None,
        }
    }
}

impl<I: Iterator> Iterator for Source<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.buffered.take().or_else(|| self.inner.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.buffered.is_some());
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}

impl<I: Iterator> Cursor for Source<I> {
    #[inline]
    fn has_next(&mut self) -> bool {
        if self.buffered.is_none() {
            self.buffered = self.inner.next();
        }
        self.buffered.is_some()
    }
}

// =============================================================================
// Map
// =============================================================================

/// Applies a function to every pulled element.
pub struct MapCursor<C, F> {
    upstream: C,
    function: F,
}

impl<C, F> MapCursor<C, F> {
    pub(crate) const fn new(upstream: C, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<B, C, F> Iterator for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(&mut self.function)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<B, C, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Keeps the elements matching a predicate, buffering the next match.
pub struct FilterCursor<C: Cursor, P> {
    upstream: C,
    predicate: P,
    buffered: Option<C::Item>,
}

impl<C: Cursor, P> FilterCursor<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            buffered: None,
        }
    }
}

impl<C, P> Iterator for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.has_next() {
            self.buffered.take()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.buffered.is_some());
        let (_, upper) = self.upstream.size_hint();
        (extra, upper.and_then(|upper| upper.checked_add(extra)))
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn has_next(&mut self) -> bool {
        if self.buffered.is_some() {
            return true;
        }
        for candidate in self.upstream.by_ref() {
            if (self.predicate)(&candidate) {
                self.buffered = Some(candidate);
                return true;
            }
        }
        false
    }
}

// =============================================================================
// Flat
// =============================================================================

/// Expands every upstream element into an inner iterator and drains it.
pub struct FlatCursor<C, F, J: IntoIterator> {
    upstream: C,
    function: F,
    current: Option<Peekable<J::IntoIter>>,
}

impl<C, F, J: IntoIterator> FlatCursor<C, F, J> {
    pub(crate) const fn new(upstream: C, function: F) -> Self {
        Self {
            upstream,
            function,
            current: None,
        }
    }
}

impl<C, F, J> Iterator for FlatCursor<C, F, J>
where
    C: Cursor,
    F: FnMut(C::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    #[inline]
    fn next(&mut self) -> Option<J::Item> {
        if self.has_next() {
            self.current.as_mut().and_then(Iterator::next)
        } else {
            None
        }
    }
}

impl<C, F, J> Cursor for FlatCursor<C, F, J>
where
    C: Cursor,
    F: FnMut(C::Item) -> J,
    J: IntoIterator,
{
    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = self.current.as_mut()
                && current.peek().is_some()
            {
                return true;
            }
            match self.upstream.next() {
                Some(element) => {
                    self.current = Some((self.function)(element).into_iter().peekable());
                }
                None => {
                    self.current = None;
                    return false;
                }
            }
        }
    }
}

// =============================================================================
// Each
// =============================================================================

/// Observes every element as it is pulled.
pub struct EachCursor<C, F> {
    upstream: C,
    action: F,
}

impl<C, F> EachCursor<C, F> {
    pub(crate) const fn new(upstream: C, action: F) -> Self {
        Self { upstream, action }
    }
}

impl<C, F> Iterator for EachCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.upstream.next().inspect(&mut self.action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<C, F> Cursor for EachCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Produces elements from an environment until a condition stops holding.
pub struct Generator<E, H, N> {
    environment: E,
    condition: H,
    step: N,
    exhausted: bool,
}

impl<E, H, N> Generator<E, H, N> {
    pub(crate) const fn new(environment: E, condition: H, step: N) -> Self {
        Self {
            environment,
            condition,
            step,
            exhausted: false,
        }
    }
}

impl<E, H, N, T> Iterator for Generator<E, H, N>
where
    H: FnMut(&E) -> bool,
    N: FnMut(&mut E) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.has_next() {
            Some((self.step)(&mut self.environment))
        } else {
            None
        }
    }
}

impl<E, H, N, T> Cursor for Generator<E, H, N>
where
    H: FnMut(&E) -> bool,
    N: FnMut(&mut E) -> T,
{
    #[inline]
    fn has_next(&mut self) -> bool {
        if !self.exhausted && !(self.condition)(&self.environment) {
            self.exhausted = true;
        }
        !self.exhausted
    }
}

// =============================================================================
// Stepper
// =============================================================================

/// Counts from a start towards an inclusive bound by a fixed stride.
///
/// The stride carries the direction. Counting stops at the bound or when the
/// next value would overflow `i64`.
pub struct Stepper {
    upcoming: Option<i64>,
    bound: i64,
    stride: i64,
}

impl Stepper {
    pub(crate) const fn new(from: i64, bound: i64, stride: i64) -> Self {
        Self {
            upcoming: Some(from),
            bound,
            stride,
        }
    }

    const fn within(&self, value: i64) -> bool {
        if self.stride < 0 {
            value >= self.bound
        } else {
            value <= self.bound
        }
    }
}

impl Iterator for Stepper {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        let current = self.upcoming.filter(|value| self.within(*value))?;
        self.upcoming = current.checked_add(self.stride);
        Some(current)
    }
}

impl Cursor for Stepper {
    #[inline]
    fn has_next(&mut self) -> bool {
        self.upcoming.is_some_and(|value| self.within(value))
    }
}
