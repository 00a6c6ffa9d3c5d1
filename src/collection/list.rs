//! Sugared list.
//!
//! [`Slist`] owns a `Vec` and adds negative indexing, clamped views,
//! grouping, chunking and the other list combinators. Index arguments are
//! `isize`: a negative index `i` means `len + i`.
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! let list = slist![10, 20, 30, 40];
//!
//! assert_eq!(list.opt(-1), Opt::of(&40));
//! assert_eq!(list.narrow(-2, 0), &[30, 40]);
//! assert_eq!(list.narrow(-100, 100).len(), 4);
//! assert_eq!(list.slice(1, 3), slist![20, 30]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::index;
use super::traits::{Deletable, Filterable, Groupable, Orderable, Pushable};
use super::{Smap, Sset};
use crate::error::{SugarError, SugarResult};
use crate::factory::CollectionFactory;
use crate::iter::{SIter, Source};
use crate::value::Opt;

/// A list with fluent, chainable operations.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Slist<T> {
    items: Vec<T>,
}

impl<T> Slist<T> {
    // =========================================================================
    // Construction and inspection
    // =========================================================================

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps into the backing `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a lazy iterator over borrowed elements.
    #[inline]
    pub fn iter(&self) -> SIter<Source<std::slice::Iter<'_, T>>> {
        SIter::of(self.items.iter())
    }

    /// Returns a lazy iterator that takes ownership of the elements.
    #[inline]
    pub fn into_siter(self) -> SIter<Source<std::vec::IntoIter<T>>> {
        SIter::of(self.items)
    }

    // =========================================================================
    // Indexed access
    // =========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IndexOutOfBounds`] when no element sits at `index`.
    #[inline]
    pub fn get(&self, index: isize) -> SugarResult<&T> {
        index::checked_element(index, self.len()).map(|resolved| &self.items[resolved])
    }

    /// Returns the element at `index` if it exists. Never fails.
    #[inline]
    pub fn opt(&self, index: isize) -> Opt<&T> {
        Opt::from(index::element(index, self.len()).map(|resolved| &self.items[resolved]))
    }

    /// Returns the first element.
    #[inline]
    pub fn head(&self) -> Opt<&T> {
        Opt::from(self.items.first())
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> Opt<&T> {
        Opt::from(self.items.last())
    }

    /// Returns the bounds-checked view `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IndexOutOfBounds`] when either bound lies outside
    /// the list or the range is inverted.
    pub fn sub_list(&self, from: isize, to: isize) -> SugarResult<&[T]> {
        index::checked_range(from, to, self.len()).map(|range| &self.items[range])
    }

    /// Returns the bounds-checked view from `from` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IndexOutOfBounds`] when `from` lies outside the list.
    pub fn sub_list_from(&self, from: isize) -> SugarResult<&[T]> {
        let len = isize::try_from(self.len()).unwrap_or(isize::MAX);
        self.sub_list(index::offset(from, self.len()), len)
    }

    /// Returns the clamped view `from..to`. Never fails.
    ///
    /// `from` is clamped at zero and `to` at the length; an inverted range
    /// gives an empty view. A negative `from` with a `to` that resolves to 0
    /// reaches the end.
    #[inline]
    pub fn narrow(&self, from: isize, to: isize) -> &[T] {
        &self.items[index::clamped_range(from, to, self.len())]
    }

    /// Returns the clamped view from `from` to the end.
    #[inline]
    pub fn narrow_from(&self, from: isize) -> &[T] {
        let len = isize::try_from(self.len()).unwrap_or(isize::MAX);
        self.narrow(from, len)
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn index_where<P>(&self, predicate: P) -> Opt<usize>
    where
        P: FnMut(&T) -> bool,
    {
        Opt::from(self.items.iter().position(predicate))
    }

    /// Returns the index of the last element matching `predicate`.
    pub fn last_index_where<P>(&self, predicate: P) -> Opt<usize>
    where
        P: FnMut(&T) -> bool,
    {
        Opt::from(self.items.iter().rposition(predicate))
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    /// Inserts `value` at `index`; `len` is a valid position.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IndexOutOfBounds`] when `index` lies outside `0..=len`.
    pub fn push_at(&mut self, index: isize, value: T) -> SugarResult<&mut Self> {
        let position = index::checked_position(index, self.len())?;
        self.items.insert(position, value);
        Ok(self)
    }

    /// Inserts every value of `values` at `index`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IndexOutOfBounds`] when `index` lies outside `0..=len`.
    pub fn push_all_at<I>(&mut self, index: isize, values: I) -> SugarResult<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        let position = index::checked_position(index, self.len())?;
        self.items.splice(position..position, values);
        Ok(self)
    }

    /// Replaces the element at `index` with `function` applied to it.
    ///
    /// Does nothing when no element sits at `index`.
    pub fn update_at<F>(&mut self, index: isize, function: F) -> &mut Self
    where
        F: FnOnce(&T) -> T,
    {
        if let Some(resolved) = index::element(index, self.len()) {
            self.items[resolved] = function(&self.items[resolved]);
        }
        self
    }

    /// Replaces every element with `function` applied to it.
    pub fn update_all<F>(&mut self, mut function: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        for element in &mut self.items {
            *element = function(element);
        }
        self
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Runs `action` on every element.
    pub fn each<F>(&self, action: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(action);
        self
    }

    /// Runs `action` on every element with its index.
    pub fn each_indexed<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(usize, &T),
    {
        for (position, element) in self.items.iter().enumerate() {
            action(position, element);
        }
        self
    }

    /// Runs `action` on the whole list.
    pub fn tap<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        action(self);
        self
    }

    /// Returns `true` when any element matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Returns `true` when every element matches `predicate`.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    // =========================================================================
    // Constructive transformation
    // =========================================================================

    /// Maps every element.
    pub fn map<U, F>(&self, function: F) -> Slist<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(function).collect()
    }

    /// Maps every element together with its index.
    pub fn map_indexed<U, F>(&self, mut function: F) -> Slist<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(position, element)| function(position, element))
            .collect()
    }

    /// Maps every element to an iterable and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// let halves = slist![1, 2, 3].flat_map(|n| if n % 2 == 0 { Opt::of(n / 2) } else { Opt::none() });
    /// assert_eq!(halves, slist![1]);
    /// ```
    pub fn flat_map<U, I, F>(&self, function: F) -> Slist<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.items.iter().flat_map(function).collect()
    }

    /// Concatenates the rendered elements with `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter().join(separator)
    }

    /// Returns `true` when an element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns `true` when the list begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.items.starts_with(prefix)
    }

    /// Returns `true` when the list ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.items.ends_with(suffix)
    }

    /// Returns this list, or `fallback` when it is empty.
    #[inline]
    pub fn or_else(self, fallback: Self) -> Self {
        if self.is_empty() { fallback } else { self }
    }

    /// Builds a map from the key/value pairs produced by `function`.
    ///
    /// The map uses the current factory; later pairs overwrite earlier ones.
    pub fn to_map<K, V, F>(&self, mut function: F) -> Smap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> (K, V),
    {
        let mut map = Smap::new();
        for element in &self.items {
            let (key, value) = function(element);
            map.push(key, value);
        }
        map
    }
}

impl<T: Clone> Slist<T> {
    /// Returns a detached copy of the clamped view `from..to`.
    #[inline]
    pub fn slice(&self, from: isize, to: isize) -> Self {
        Self::from(self.narrow(from, to).to_vec())
    }

    /// Returns a detached copy of the clamped view from `from` to the end.
    #[inline]
    pub fn slice_from(&self, from: isize) -> Self {
        Self::from(self.narrow_from(from).to_vec())
    }

    /// Returns every element but the first.
    #[inline]
    pub fn tail(&self) -> Self {
        self.slice_from(1)
    }

    /// Returns a copy with the element at `index` replaced by `function` applied to it.
    pub fn map_at<F>(&self, index: isize, function: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let mut copy = self.clone();
        copy.update_at(index, function);
        copy
    }

    /// Keeps the elements whose index and value match `predicate`.
    pub fn filter_indexed<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(position, element)| predicate(*position, element))
            .map(|(_, element)| element.clone())
            .collect()
    }

    /// Returns a copy in reverse order.
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Splits into consecutive chunks of `size` elements; the last may be shorter.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::IllegalArgument`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// let chunks = slist![1, 2, 3, 4, 5].chunk(2)?;
    /// assert_eq!(chunks, slist![slist![1, 2], slist![3, 4], slist![5]]);
    /// assert!(slist![1].chunk(0).is_err());
    /// # Ok::<(), SugarError>(())
    /// ```
    pub fn chunk(&self, size: usize) -> SugarResult<Slist<Self>> {
        if size == 0 {
            return Err(SugarError::illegal_argument(
                "size",
                "chunk size must be greater than 0",
            ));
        }
        Ok(self
            .items
            .chunks(size)
            .map(|chunk| Self::from(chunk.to_vec()))
            .collect())
    }

    /// Removes duplicates, keeping the first occurrence of each element.
    pub fn uniq(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.items
            .iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    /// Removes elements whose key was already seen, keeping the first one.
    pub fn uniq_by<K, F>(&self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.items
            .iter()
            .filter(|element| seen.insert(key(element)))
            .cloned()
            .collect()
    }

    /// Collects the elements into a set built by the current factory.
    pub fn to_set(&self) -> Sset<T>
    where
        T: Eq + Hash,
    {
        self.items.iter().cloned().collect()
    }
}

// =============================================================================
// Capability traits
// =============================================================================

impl<T> Pushable<T> for Slist<T> {
    #[inline]
    fn push(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
        self
    }
}

impl<T> Deletable<T> for Slist<T> {
    fn delete_where<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.retain(|element| !predicate(element));
        self
    }
}

impl<T: Clone> Filterable<T> for Slist<T> {
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|element| predicate(element)).count()
    }
}

impl<T: Clone> Groupable<T> for Slist<T> {
    fn group<K, F>(&self, mut key: F) -> Smap<K, Self>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups = CollectionFactory::fifo().new_map();
        for element in &self.items {
            groups
                .slot_or_insert_with(key(element), Self::new)
                .push(element.clone());
        }
        groups
    }
}

impl<T: Clone> Orderable<T> for Slist<T> {
    fn order_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> std::cmp::Ordering + 'static,
    {
        let mut items = self.items.clone();
        items.sort_by(comparator);
        Self::from(items)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Default for Slist<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Slist<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Slist<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Slist<T>> for Vec<T> {
    #[inline]
    fn from(list: Slist<T>) -> Self {
        list.items
    }
}

impl<T> AsRef<[T]> for Slist<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for Slist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Slist<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Slist<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Slist<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Slist<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Slist<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Slist<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]", self.join(", "))
    }
}
