//! Sugared set.
//!
//! [`Sset`] owns one backing store chosen by the collection factory: a hash
//! store, an insertion-ordered store or a sorted store. Set algebra builds a
//! new set with the receiver's store kind.
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! let a = sset![1, 2, 3];
//! let b = [2, 3, 4];
//!
//! assert_eq!(a.union(b), sset![1, 2, 3, 4]);
//! assert_eq!(a.intersect(b), sset![2, 3]);
//! assert_eq!(a.diff(b), sset![1, 4]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use super::store::{SetIntoIter, SetIter, SetStore};
use super::traits::{Deletable, Filterable, Groupable, Orderable, Pushable};
use super::{Slist, Smap};
use crate::factory::{self, CollectionFactory, Layout};
use crate::iter::{SIter, Source};

/// A set with fluent, chainable operations.
///
/// Equality ignores the store kind: two sets are equal when they hold the
/// same members.
pub struct Sset<T> {
    store: SetStore<T>,
}

impl<T: Eq + Hash> Sset<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty set with the process-wide factory's layout.
    #[inline]
    pub fn new() -> Self {
        factory::current().new_set()
    }

    /// Creates an empty set with `factory`'s layout.
    #[inline]
    pub fn new_in(factory: &CollectionFactory) -> Self {
        factory.new_set()
    }

    /// Creates an empty set with an explicit layout.
    #[inline]
    pub fn with_layout(layout: Layout) -> Self {
        Self::from_store(SetStore::with_layout(layout))
    }

    /// Creates an empty set kept sorted by `comparator`.
    ///
    /// The comparator should agree with `Eq`. Values it reports as equal are
    /// kept once, and equality against sets of another layout is only
    /// symmetric when the two notions match.
    #[inline]
    pub fn sorted_by<C>(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::from_store(SetStore::sorted(Rc::new(comparator)))
    }

    pub(crate) const fn from_store(store: SetStore<T>) -> Self {
        Self { store }
    }

    fn empty_like(&self) -> Self {
        Self::from_store(self.store.empty_like())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` when `value` is a member.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.store.contains(value)
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// Returns the members of both this set and `values`.
    pub fn union<I>(&self, values: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut merged = self.clone();
        merged.push_all(values);
        merged
    }

    /// Returns the members present in both this set and `values`.
    pub fn intersect<I>(&self, values: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let others = self.empty_like().union(values);
        self.filter(|value| others.contains(value))
    }

    /// Returns the symmetric difference of this set and `values`.
    pub fn diff<I>(&self, values: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let others = self.empty_like().union(values);
        let mut difference = self.filter(|value| !others.contains(value));
        difference.push_all(others.into_iter().filter(|value| !self.contains(value)));
        difference
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps every member into a new set.
    ///
    /// Hash sets stay hash sets; insertion-ordered and sorted sets become
    /// insertion-ordered sets in this set's iteration order.
    pub fn map<U, F>(&self, function: F) -> Sset<U>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> U,
    {
        let mut mapped = Sset::from_store(self.store.empty_for());
        mapped.push_all(self.store.iter().map(function));
        mapped
    }

    /// Maps every member to an iterable and merges the results.
    pub fn flat_map<U, I, F>(&self, function: F) -> Sset<U>
    where
        U: Eq + Hash,
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        let mut mapped = Sset::from_store(self.store.empty_for());
        mapped.push_all(self.store.iter().flat_map(function));
        mapped
    }

    /// Merges the contents of members that are themselves iterable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// let nested = sset![vec![1, 2], vec![2, 3]];
    /// assert_eq!(nested.flat(), sset![1, 2, 3]);
    /// ```
    pub fn flat<U>(&self) -> Sset<U>
    where
        T: Clone + IntoIterator<Item = U>,
        U: Eq + Hash,
    {
        self.flat_map(|member| member.clone())
    }

    /// Returns every member but the first in iteration order.
    pub fn tail(&self) -> Self
    where
        T: Clone,
    {
        let mut rest = self.empty_like();
        rest.push_all(self.store.iter().skip(1).cloned());
        rest
    }

    /// Returns this set, or `fallback` when it is empty.
    #[inline]
    pub fn or_else(self, fallback: Self) -> Self {
        if self.is_empty() { fallback } else { self }
    }
}

impl<T> Sset<T> {
    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` when the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a lazy iterator over borrowed members.
    #[inline]
    pub fn iter(&self) -> SIter<Source<SetIter<'_, T>>> {
        SIter::of(self.store.iter())
    }

    /// Collects the members into a list, in iteration order.
    pub fn to_list(&self) -> Slist<T>
    where
        T: Clone,
    {
        self.store.iter().cloned().collect()
    }

    /// Returns `true` when any member matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.store.iter().any(predicate)
    }

    /// Returns `true` when every member matches `predicate`.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.store.iter().all(predicate)
    }

    /// Runs `action` on every member.
    pub fn each<F>(&self, action: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.store.iter().for_each(action);
        self
    }

    /// Concatenates the rendered members with `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter().join(separator)
    }
}

// =============================================================================
// Capability traits
// =============================================================================

impl<T: Eq + Hash> Pushable<T> for Sset<T> {
    #[inline]
    fn push(&mut self, value: T) -> &mut Self {
        self.store.insert(value);
        self
    }
}

impl<T: Eq + Hash> Deletable<T> for Sset<T> {
    fn delete_where<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        self.store.retain(|value| !predicate(value));
        self
    }

    fn delete_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        for value in values {
            self.store.remove(&value);
        }
        self
    }

    fn delete(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.store.remove(value);
        self
    }
}

impl<T: Eq + Hash + Clone> Filterable<T> for Sset<T> {
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = self.empty_like();
        kept.push_all(self.store.iter().filter(|value| predicate(value)).cloned());
        kept
    }

    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.store.iter().filter(|value| predicate(value)).count()
    }
}

impl<T: Eq + Hash + Clone> Groupable<T> for Sset<T> {
    fn group<K, F>(&self, mut key: F) -> Smap<K, Self>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups = CollectionFactory::fifo().new_map();
        for value in self.store.iter() {
            groups
                .slot_or_insert_with(key(value), || self.empty_like())
                .push(value.clone());
        }
        groups
    }
}

impl<T: Eq + Hash + Clone> Orderable<T> for Sset<T> {
    fn order_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        let mut ordered = Self::sorted_by(comparator);
        ordered.push_all(self.store.iter().cloned());
        ordered
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: Eq + Hash> Default for Sset<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sset<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Eq + Hash> PartialEq for Sset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.store.iter().all(|value| other.contains(value))
    }
}

impl<T: Eq + Hash> Eq for Sset<T> {}

impl<T: Eq + Hash> FromIterator<T> for Sset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.push_all(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Sset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Sset<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Eq + Hash, S> From<std::collections::HashSet<T, S>> for Sset<T> {
    fn from(values: std::collections::HashSet<T, S>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Sset<T> {
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    #[inline]
    fn into_iter(self) -> SetIntoIter<T> {
        self.store.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sset<T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SetIter<'a, T> {
        self.store.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sset<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.store.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sset<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{{}}}", self.join(", "))
    }
}

impl<T> Sset<T> {
    /// Names the backing store: `"hash"`, `"fifo"` or `"sorted"`.
    #[inline]
    pub const fn store_kind(&self) -> &'static str {
        self.store.kind()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sset<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.store.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SsetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SsetVisitor<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    type Value = Sset<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Sset::new();
        while let Some(element) = seq.next_element()? {
            set.push(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sset<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    /// Deserializes into a set with the current factory's layout.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SsetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_not_impl_any!(Sset<i32>: Send, Sync);
