//! Backing stores for sets and maps.
//!
//! Every [`Sset`](super::Sset) and [`Smap`](super::Smap) owns exactly one
//! store. The store kind is chosen when the wrapper is created: a hash store,
//! an insertion-ordered (FIFO) store, or a sorted store carrying its
//! comparator.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, hash_map, hash_set};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::factory::{HashBuilder, Layout};

/// A shared comparator used by sorted stores.
pub(crate) type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

// =============================================================================
// Sorted stores
// =============================================================================

/// A set kept sorted by its comparator.
///
/// Two values the comparator reports as equal are the same member.
#[derive(Clone)]
pub(crate) struct SortedSet<T> {
    items: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> SortedSet<T> {
    pub(crate) const fn new(comparator: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    fn position(&self, value: &T) -> Result<usize, usize> {
        self.items
            .binary_search_by(|candidate| (self.comparator)(candidate, value))
    }

    fn insert(&mut self, value: T) -> bool {
        match self.position(&value) {
            Ok(_) => false,
            Err(slot) => {
                self.items.insert(slot, value);
                true
            }
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.position(value).is_ok()
    }

    fn remove(&mut self, value: &T) -> bool {
        self.position(value)
            .map(|slot| self.items.remove(slot))
            .is_ok()
    }
}

/// A map kept sorted by a comparator on its keys.
#[derive(Clone)]
pub(crate) struct SortedMap<K, V> {
    entries: Vec<(K, V)>,
    comparator: Comparator<K>,
}

impl<K, V> SortedMap<K, V> {
    pub(crate) const fn new(comparator: Comparator<K>) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    fn position(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(candidate, _)| (self.comparator)(candidate, key))
    }
}

// =============================================================================
// SetStore
// =============================================================================

#[derive(Clone)]
pub(crate) enum SetStore<T> {
    Hash(HashSet<T, HashBuilder>),
    Fifo(IndexSet<T, HashBuilder>),
    Sorted(SortedSet<T>),
}

impl<T: Eq + Hash> SetStore<T> {
    pub(crate) fn with_layout(layout: Layout) -> Self {
        match layout {
            Layout::Hash => Self::Hash(HashSet::with_hasher(HashBuilder::default())),
            Layout::Fifo => Self::Fifo(IndexSet::with_hasher(HashBuilder::default())),
        }
    }

    pub(crate) const fn sorted(comparator: Comparator<T>) -> Self {
        Self::Sorted(SortedSet::new(comparator))
    }

    /// Creates an empty store of the same kind.
    pub(crate) fn empty_like(&self) -> Self {
        match self {
            Self::Hash(_) => Self::with_layout(Layout::Hash),
            Self::Fifo(_) => Self::with_layout(Layout::Fifo),
            Self::Sorted(sorted) => Self::sorted(Rc::clone(&sorted.comparator)),
        }
    }

    /// Creates an empty store able to hold another element type.
    ///
    /// Sorted stores cannot carry their comparator over, so they fall back to
    /// insertion order.
    pub(crate) fn empty_for<U: Eq + Hash>(&self) -> SetStore<U> {
        match self {
            Self::Hash(_) => SetStore::with_layout(Layout::Hash),
            Self::Fifo(_) | Self::Sorted(_) => SetStore::with_layout(Layout::Fifo),
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> bool {
        match self {
            Self::Hash(set) => set.insert(value),
            Self::Fifo(set) => set.insert(value),
            Self::Sorted(set) => set.insert(value),
        }
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        match self {
            Self::Hash(set) => set.contains(value),
            Self::Fifo(set) => set.contains(value),
            Self::Sorted(set) => set.contains(value),
        }
    }

    pub(crate) fn remove(&mut self, value: &T) -> bool {
        match self {
            Self::Hash(set) => set.remove(value),
            Self::Fifo(set) => set.shift_remove(value),
            Self::Sorted(set) => set.remove(value),
        }
    }

    pub(crate) fn retain<P>(&mut self, mut keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Hash(set) => set.retain(|value| keep(value)),
            Self::Fifo(set) => set.retain(|value| keep(value)),
            Self::Sorted(set) => set.items.retain(|value| keep(value)),
        }
    }
}

impl<T> SetStore<T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Hash(set) => set.len(),
            Self::Fifo(set) => set.len(),
            Self::Sorted(set) => set.items.len(),
        }
    }

    pub(crate) fn iter(&self) -> SetIter<'_, T> {
        SetIter(match self {
            Self::Hash(set) => SetIterInner::Hash(set.iter()),
            Self::Fifo(set) => SetIterInner::Fifo(set.iter()),
            Self::Sorted(set) => SetIterInner::Sorted(set.items.iter()),
        })
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Hash(_) => "hash",
            Self::Fifo(_) => "fifo",
            Self::Sorted(_) => "sorted",
        }
    }
}

impl<T> IntoIterator for SetStore<T> {
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    fn into_iter(self) -> SetIntoIter<T> {
        SetIntoIter(match self {
            Self::Hash(set) => SetIntoIterInner::Hash(set.into_iter()),
            Self::Fifo(set) => SetIntoIterInner::Fifo(set.into_iter()),
            Self::Sorted(set) => SetIntoIterInner::Sorted(set.items.into_iter()),
        })
    }
}

/// Borrowing iterator over the members of an [`Sset`](super::Sset).
pub struct SetIter<'a, T>(SetIterInner<'a, T>);

enum SetIterInner<'a, T> {
    Hash(hash_set::Iter<'a, T>),
    Fifo(indexmap::set::Iter<'a, T>),
    Sorted(std::slice::Iter<'a, T>),
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match &mut self.0 {
            SetIterInner::Hash(iter) => iter.next(),
            SetIterInner::Fifo(iter) => iter.next(),
            SetIterInner::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            SetIterInner::Hash(iter) => iter.size_hint(),
            SetIterInner::Fifo(iter) => iter.size_hint(),
            SetIterInner::Sorted(iter) => iter.size_hint(),
        }
    }
}

/// Owning iterator over the members of an [`Sset`](super::Sset).
pub struct SetIntoIter<T>(SetIntoIterInner<T>);

enum SetIntoIterInner<T> {
    Hash(hash_set::IntoIter<T>),
    Fifo(indexmap::set::IntoIter<T>),
    Sorted(std::vec::IntoIter<T>),
}

impl<T> Iterator for SetIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match &mut self.0 {
            SetIntoIterInner::Hash(iter) => iter.next(),
            SetIntoIterInner::Fifo(iter) => iter.next(),
            SetIntoIterInner::Sorted(iter) => iter.next(),
        }
    }
}

// =============================================================================
// MapStore
// =============================================================================

#[derive(Clone)]
pub(crate) enum MapStore<K, V> {
    Hash(HashMap<K, V, HashBuilder>),
    Fifo(IndexMap<K, V, HashBuilder>),
    Sorted(SortedMap<K, V>),
}

impl<K: Eq + Hash, V> MapStore<K, V> {
    pub(crate) fn with_layout(layout: Layout) -> Self {
        match layout {
            Layout::Hash => Self::Hash(HashMap::with_hasher(HashBuilder::default())),
            Layout::Fifo => Self::Fifo(IndexMap::with_hasher(HashBuilder::default())),
        }
    }

    pub(crate) const fn sorted(comparator: Comparator<K>) -> Self {
        Self::Sorted(SortedMap::new(comparator))
    }

    pub(crate) fn empty_like(&self) -> Self {
        match self {
            Self::Hash(_) => Self::with_layout(Layout::Hash),
            Self::Fifo(_) => Self::with_layout(Layout::Fifo),
            Self::Sorted(sorted) => Self::sorted(Rc::clone(&sorted.comparator)),
        }
    }

    /// Creates an empty store with the same key handling and another value type.
    pub(crate) fn empty_with_values<U>(&self) -> MapStore<K, U> {
        match self {
            Self::Hash(_) => MapStore::with_layout(Layout::Hash),
            Self::Fifo(_) => MapStore::with_layout(Layout::Fifo),
            Self::Sorted(sorted) => MapStore::sorted(Rc::clone(&sorted.comparator)),
        }
    }

    /// Creates an empty store for other key and value types.
    pub(crate) fn empty_for<L: Eq + Hash, U>(&self) -> MapStore<L, U> {
        match self {
            Self::Hash(_) => MapStore::with_layout(Layout::Hash),
            Self::Fifo(_) | Self::Sorted(_) => MapStore::with_layout(Layout::Fifo),
        }
    }

    /// Creates an empty set store able to hold this map's keys in iteration order.
    pub(crate) fn key_set_store(&self) -> SetStore<K> {
        match self {
            Self::Hash(_) => SetStore::with_layout(Layout::Hash),
            Self::Fifo(_) | Self::Sorted(_) => SetStore::with_layout(Layout::Fifo),
        }
    }

    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self {
            Self::Hash(map) => map.insert(key, value),
            Self::Fifo(map) => map.insert(key, value),
            Self::Sorted(map) => match map.position(&key) {
                Ok(slot) => Some(std::mem::replace(&mut map.entries[slot].1, value)),
                Err(slot) => {
                    map.entries.insert(slot, (key, value));
                    None
                }
            },
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        match self {
            Self::Hash(map) => map.get(key),
            Self::Fifo(map) => map.get(key),
            Self::Sorted(map) => map
                .position(key)
                .ok()
                .map(|slot| &map.entries[slot].1),
        }
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self {
            Self::Hash(map) => map.get_mut(key),
            Self::Fifo(map) => map.get_mut(key),
            Self::Sorted(map) => match map.position(key) {
                Ok(slot) => Some(&mut map.entries[slot].1),
                Err(_) => None,
            },
        }
    }

    /// Returns the value slot for `key`, inserting `default()` first when absent.
    pub(crate) fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Hash(map) => map.entry(key).or_insert_with(default),
            Self::Fifo(map) => map.entry(key).or_insert_with(default),
            Self::Sorted(map) => {
                let slot = match map.position(&key) {
                    Ok(slot) => slot,
                    Err(slot) => {
                        map.entries.insert(slot, (key, default()));
                        slot
                    }
                };
                &mut map.entries[slot].1
            }
        }
    }

    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        match self {
            Self::Hash(map) => map.remove(key),
            Self::Fifo(map) => map.shift_remove(key),
            Self::Sorted(map) => map
                .position(key)
                .ok()
                .map(|slot| map.entries.remove(slot).1),
        }
    }

    pub(crate) fn retain<P>(&mut self, mut keep: P)
    where
        P: FnMut(&K, &mut V) -> bool,
    {
        match self {
            Self::Hash(map) => map.retain(|key, value| keep(key, value)),
            Self::Fifo(map) => map.retain(|key, value| keep(key, value)),
            Self::Sorted(map) => map.entries.retain_mut(|(key, value)| keep(key, value)),
        }
    }
}

impl<K, V> MapStore<K, V> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Hash(map) => map.len(),
            Self::Fifo(map) => map.len(),
            Self::Sorted(map) => map.entries.len(),
        }
    }

    pub(crate) fn iter(&self) -> MapIter<'_, K, V> {
        MapIter(match self {
            Self::Hash(map) => MapIterInner::Hash(map.iter()),
            Self::Fifo(map) => MapIterInner::Fifo(map.iter()),
            Self::Sorted(map) => MapIterInner::Sorted(map.entries.iter()),
        })
    }

    pub(crate) fn iter_mut(&mut self) -> MapIterMut<'_, K, V> {
        MapIterMut(match self {
            Self::Hash(map) => MapIterMutInner::Hash(map.iter_mut()),
            Self::Fifo(map) => MapIterMutInner::Fifo(map.iter_mut()),
            Self::Sorted(map) => MapIterMutInner::Sorted(map.entries.iter_mut()),
        })
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Hash(_) => "hash",
            Self::Fifo(_) => "fifo",
            Self::Sorted(_) => "sorted",
        }
    }
}

impl<K, V> IntoIterator for MapStore<K, V> {
    type Item = (K, V);
    type IntoIter = MapIntoIter<K, V>;

    fn into_iter(self) -> MapIntoIter<K, V> {
        MapIntoIter(match self {
            Self::Hash(map) => MapIntoIterInner::Hash(map.into_iter()),
            Self::Fifo(map) => MapIntoIterInner::Fifo(map.into_iter()),
            Self::Sorted(map) => MapIntoIterInner::Sorted(map.entries.into_iter()),
        })
    }
}

/// Borrowing iterator over the entries of an [`Smap`](super::Smap).
pub struct MapIter<'a, K, V>(MapIterInner<'a, K, V>);

enum MapIterInner<'a, K, V> {
    Hash(hash_map::Iter<'a, K, V>),
    Fifo(indexmap::map::Iter<'a, K, V>),
    Sorted(std::slice::Iter<'a, (K, V)>),
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            MapIterInner::Hash(iter) => iter.next(),
            MapIterInner::Fifo(iter) => iter.next(),
            MapIterInner::Sorted(iter) => iter.next().map(|(key, value)| (key, value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            MapIterInner::Hash(iter) => iter.size_hint(),
            MapIterInner::Fifo(iter) => iter.size_hint(),
            MapIterInner::Sorted(iter) => iter.size_hint(),
        }
    }
}

/// Mutable iterator over the entries of an [`Smap`](super::Smap).
pub struct MapIterMut<'a, K, V>(MapIterMutInner<'a, K, V>);

enum MapIterMutInner<'a, K, V> {
    Hash(hash_map::IterMut<'a, K, V>),
    Fifo(indexmap::map::IterMut<'a, K, V>),
    Sorted(std::slice::IterMut<'a, (K, V)>),
}

impl<'a, K, V> Iterator for MapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            MapIterMutInner::Hash(iter) => iter.next(),
            MapIterMutInner::Fifo(iter) => iter.next(),
            MapIterMutInner::Sorted(iter) => iter.next().map(|(key, value)| (&*key, value)),
        }
    }
}

/// Owning iterator over the entries of an [`Smap`](super::Smap).
pub struct MapIntoIter<K, V>(MapIntoIterInner<K, V>);

enum MapIntoIterInner<K, V> {
    Hash(hash_map::IntoIter<K, V>),
    Fifo(indexmap::map::IntoIter<K, V>),
    Sorted(std::vec::IntoIter<(K, V)>),
}

impl<K, V> Iterator for MapIntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        match &mut self.0 {
            MapIntoIterInner::Hash(iter) => iter.next(),
            MapIntoIterInner::Fifo(iter) => iter.next(),
            MapIntoIterInner::Sorted(iter) => iter.next(),
        }
    }
}

impl<T> fmt::Debug for SetIter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SetIter").finish_non_exhaustive()
    }
}

impl<K, V> fmt::Debug for MapIter<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MapIter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descending() -> Comparator<i32> {
        Rc::new(|left: &i32, right: &i32| right.cmp(left))
    }

    #[rstest]
    fn test_sorted_set_keeps_comparator_order() {
        let mut store = SetStore::sorted(descending());
        for value in [2, 9, 4, 9] {
            store.insert(value);
        }
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![9, 4, 2]);
        assert!(store.remove(&4));
        assert!(!store.contains(&4));
    }

    #[rstest]
    fn test_fifo_set_removal_preserves_order() {
        let mut store = SetStore::with_layout(Layout::Fifo);
        for value in [3, 1, 2] {
            store.insert(value);
        }
        store.remove(&1);
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[rstest]
    fn test_sorted_map_insert_replaces_existing() {
        let mut store: MapStore<i32, &str> = MapStore::sorted(Rc::new(|l: &i32, r: &i32| l.cmp(r)));
        assert_eq!(store.insert(2, "b"), None);
        assert_eq!(store.insert(1, "a"), None);
        assert_eq!(store.insert(2, "B"), Some("b"));
        let entries: Vec<_> = store.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![(1, "a"), (2, "B")]);
    }

    #[rstest]
    fn test_get_or_insert_with_on_sorted_map() {
        let mut store: MapStore<&str, Vec<i32>> = MapStore::sorted(Rc::new(|l: &&str, r: &&str| l.cmp(r)));
        store.get_or_insert_with("b", Vec::new).push(1);
        store.get_or_insert_with("a", Vec::new).push(2);
        store.get_or_insert_with("b", Vec::new).push(3);
        assert_eq!(store.get(&"b"), Some(&vec![1, 3]));
        assert_eq!(store.kind(), "sorted");
    }
}
