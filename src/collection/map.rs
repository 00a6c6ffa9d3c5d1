//! Sugared map.
//!
//! [`Smap`] owns one backing store chosen by the collection factory. Its
//! `push`/`delete_*` operations mutate in place and chain; everything else
//! builds a new map.
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! let mut prices = smap! { "tea" => 3, "cake" => 5, "soup" => 7 };
//! prices.push("bread", 2).delete_where(|_, price| *price > 6);
//!
//! let cheap = prices.filter(|_, price| *price < 4);
//! assert_eq!(cheap, smap! { "tea" => 3, "bread" => 2 });
//!
//! let lunch = prices.slice(["tea", "cake", "pizza"]);
//! assert_eq!(lunch.len(), 2);
//! assert_eq!(lunch.opt(&"pizza"), Opt::none());
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use super::entry::Entry;
use super::store::{MapIntoIter, MapIter, MapStore};
use super::traits::{Orderable, Pushable};
use super::{Slist, Sset};
use crate::factory::{self, CollectionFactory, Layout};
use crate::iter::{SIter, Source};
use crate::value::Opt;

/// A map with fluent, chainable operations.
///
/// Equality ignores the store kind: two maps are equal when they hold the
/// same keys mapped to equal values.
pub struct Smap<K, V> {
    store: MapStore<K, V>,
}

impl<K: Eq + Hash, V> Smap<K, V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty map with the process-wide factory's layout.
    #[inline]
    pub fn new() -> Self {
        factory::current().new_map()
    }

    /// Creates an empty map with `factory`'s layout.
    #[inline]
    pub fn new_in(factory: &CollectionFactory) -> Self {
        factory.new_map()
    }

    /// Creates an empty map with an explicit layout.
    #[inline]
    pub fn with_layout(layout: Layout) -> Self {
        Self::from_store(MapStore::with_layout(layout))
    }

    /// Creates an empty map kept sorted by `comparator` on its keys.
    ///
    /// The comparator should agree with `Eq` on keys, otherwise equality
    /// against maps of another layout is not symmetric.
    #[inline]
    pub fn sorted_by<C>(comparator: C) -> Self
    where
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        Self::from_store(MapStore::sorted(Rc::new(comparator)))
    }

    pub(crate) const fn from_store(store: MapStore<K, V>) -> Self {
        Self { store }
    }

    fn empty_like(&self) -> Self {
        Self::from_store(self.store.empty_like())
    }

    pub(crate) fn slot_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.store.get_or_insert_with(key, default)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the value mapped to `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Returns the value mapped to `key`, mutably.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.store.get_mut(key)
    }

    /// Returns the value mapped to `key` as an [`Opt`].
    #[inline]
    pub fn opt(&self, key: &K) -> Opt<&V> {
        Opt::from(self.store.get(key))
    }

    /// Returns `true` when `key` is mapped.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    /// Maps `key` to `value`, replacing any previous value.
    #[inline]
    pub fn push(&mut self, key: K, value: V) -> &mut Self {
        self.store.insert(key, value);
        self
    }

    /// Maps `key` to the result of `supplier` unless it is already mapped.
    ///
    /// `supplier` only runs when `key` is absent.
    pub fn push_if_absent<F>(&mut self, key: K, supplier: F) -> &mut Self
    where
        F: FnOnce() -> V,
    {
        self.store.get_or_insert_with(key, supplier);
        self
    }

    /// Maps `key` to the held value, if any.
    pub fn push_opt(&mut self, key: K, value: Opt<V>) -> &mut Self {
        if let Some(value) = value.into_option() {
            self.store.insert(key, value);
        }
        self
    }

    /// Adds every pair of `entries`.
    pub fn push_all<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.store.insert(key, value);
        }
        self
    }

    /// Removes `key`.
    #[inline]
    pub fn delete(&mut self, key: &K) -> &mut Self {
        self.store.remove(key);
        self
    }

    /// Removes every key of `keys`.
    pub fn delete_keys<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.store.remove(&key);
        }
        self
    }

    /// Removes every pair matching `predicate`.
    pub fn delete_where<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.store.retain(|key, value| !predicate(key, value));
        self
    }

    /// Replaces the value of `key` with `function` applied to it.
    ///
    /// Does nothing when `key` is absent.
    pub fn update<F>(&mut self, key: &K, function: F) -> &mut Self
    where
        F: FnOnce(&V) -> V,
    {
        if let Some(value) = self.store.get_mut(key) {
            *value = function(value);
        }
        self
    }

    /// Replaces every value with `function` applied to its pair.
    pub fn update_all<F>(&mut self, mut function: F) -> &mut Self
    where
        F: FnMut(&K, &V) -> V,
    {
        for (key, value) in self.store.iter_mut() {
            *value = function(key, value);
        }
        self
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Collects the keys into a set, in iteration order.
    ///
    /// Hash maps give hash sets; the other kinds give insertion-ordered sets.
    pub fn keys(&self) -> Sset<K>
    where
        K: Clone,
    {
        let mut keys = Sset::from_store(self.store.key_set_store());
        keys.push_all(self.store.iter().map(|(key, _)| key.clone()));
        keys
    }

    /// Collects the values into a list, in iteration order.
    pub fn vals(&self) -> Slist<V>
    where
        V: Clone,
    {
        self.store.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns detached copies of every pair.
    pub fn entries(&self) -> Slist<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.store
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns an [`Entry`] for every pair.
    ///
    /// Entries write through with [`Entry::update`]; their captured
    /// `key`/`val` stay as they were when this method was called.
    pub fn entries_mut(&mut self) -> Slist<Entry<'_, K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.store
            .iter_mut()
            .map(|(key, slot)| Entry::new(key, slot))
            .collect()
    }

    // =========================================================================
    // Constructive transformation
    // =========================================================================

    /// Returns a new map with the pairs matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> bool,
    {
        let mut kept = self.empty_like();
        for (key, value) in self.store.iter() {
            if predicate(key, value) {
                kept.push(key.clone(), value.clone());
            }
        }
        kept
    }

    /// Maps every value, keeping keys and store kind.
    pub fn map_values<U, F>(&self, mut function: F) -> Smap<K, U>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        let mut mapped = Smap::from_store(self.store.empty_with_values());
        for (key, value) in self.store.iter() {
            mapped.push(key.clone(), function(value));
        }
        mapped
    }

    /// Maps every pair to a new pair.
    ///
    /// Sorted maps become insertion-ordered maps in this map's iteration order.
    pub fn map_entries<L, U, F>(&self, mut function: F) -> Smap<L, U>
    where
        L: Eq + Hash,
        F: FnMut(&K, &V) -> (L, U),
    {
        let mut mapped = Smap::from_store(self.store.empty_for());
        for (key, value) in self.store.iter() {
            let (key, value) = function(key, value);
            mapped.push(key, value);
        }
        mapped
    }

    /// Maps every pair to an optional value, dropping the absent ones.
    pub fn flat_map_values<U, F>(&self, mut function: F) -> Smap<K, U>
    where
        K: Clone,
        F: FnMut(&K, &V) -> Opt<U>,
    {
        let mut mapped = Smap::from_store(self.store.empty_with_values());
        for (key, value) in self.store.iter() {
            mapped.push_opt(key.clone(), function(key, value));
        }
        mapped
    }

    /// Returns a new map restricted to `keys`. Missing keys are skipped.
    pub fn slice<I>(&self, keys: I) -> Self
    where
        V: Clone,
        I: IntoIterator<Item = K>,
    {
        let mut sliced = self.empty_like();
        for key in keys {
            if let Some(value) = self.store.get(&key) {
                let value = value.clone();
                sliced.push(key, value);
            }
        }
        sliced
    }

    /// Returns a copy with the value of `key` replaced by `function` applied to it.
    pub fn map_at<F>(&self, key: &K, function: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnOnce(&V) -> V,
    {
        let mut copy = self.clone();
        copy.update(key, function);
        copy
    }

    /// Returns an insertion-ordered copy.
    pub fn fifo(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut copy = Self::with_layout(Layout::Fifo);
        copy.push_all(self.store.iter().map(|(key, value)| (key.clone(), value.clone())));
        copy
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Runs `action` on every pair.
    pub fn each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.store.iter() {
            action(key, value);
        }
        self
    }

    /// Returns `true` when any pair matches `predicate`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.store.iter().any(|(key, value)| predicate(key, value))
    }

    /// Returns `true` when every pair matches `predicate`.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.store.iter().all(|(key, value)| predicate(key, value))
    }

    /// Counts the pairs matching `predicate`.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.store
            .iter()
            .filter(|(key, value)| predicate(key, value))
            .count()
    }
}

impl<K, V> Smap<K, V> {
    /// Returns the number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` when the map has no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a lazy iterator over borrowed pairs.
    #[inline]
    pub fn iter(&self) -> SIter<Source<MapIter<'_, K, V>>> {
        SIter::of(self.store.iter())
    }

    /// Names the backing store: `"hash"`, `"fifo"` or `"sorted"`.
    #[inline]
    pub const fn store_kind(&self) -> &'static str {
        self.store.kind()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Orderable<K> for Smap<K, V> {
    /// Returns a copy sorted by `comparator` on the keys.
    fn order_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        let mut ordered = Self::sorted_by(comparator);
        ordered.push_all(self.store.iter().map(|(key, value)| (key.clone(), value.clone())));
        ordered
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<K: Eq + Hash, V> Default for Smap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for Smap<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Smap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .store
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Smap<K, V> {}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Smap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.push_all(iter);
        map
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for Smap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for Smap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq + Hash, V, S> From<HashMap<K, V, S>> for Smap<K, V> {
    fn from(entries: HashMap<K, V, S>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for Smap<K, V> {
    type Item = (K, V);
    type IntoIter = MapIntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> MapIntoIter<K, V> {
        self.store.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Smap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> MapIter<'a, K, V> {
        self.store.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Smap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.store.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Smap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (position, (key, value)) in self.store.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Smap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.store.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct SmapVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for SmapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    type Value = Smap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = Smap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.push(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Smap<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(SmapVisitor {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_not_impl_any!(Smap<i32, i32>: Send, Sync);
