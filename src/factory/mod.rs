//! Collection-factory strategy.
//!
//! A [`CollectionFactory`] decides which backing store every new, empty
//! [`Sset`] and [`Smap`] gets. Callers either pass a factory explicitly
//! (`Sset::new_in`, `Smap::new_in`) or rely on the process-wide default,
//! which can be replaced once at startup with [`install`].
//!
//! Sorted stores are not a layout: they need a comparator and are created
//! on demand by `order_by` or the `new_sorted_*` constructors.
//!
//! # Examples
//!
//! ```rust
//! use indolent::factory::{CollectionFactory, Layout};
//! use indolent::prelude::*;
//!
//! let factory: CollectionFactory = CollectionFactory::baseline().with_map_layout(Layout::Fifo);
//!
//! let mut scores = Smap::new_in(&factory);
//! scores.push("zed", 1).push("amy", 2).push("kim", 3);
//! assert_eq!(scores.keys().to_list(), slist!["zed", "amy", "kim"]);
//! ```

mod hasher;

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use std::str::FromStr;

use parking_lot::RwLock;

pub use hasher::{HashBuilder, hasher_name};

use crate::collection::{MapStore, SetStore, Slist, Smap, Sset};
use crate::error::SugarError;

/// The backing layout of hash-based collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Unordered hash store.
    #[default]
    Hash,
    /// Insertion-ordered store.
    Fifo,
}

impl FromStr for Layout {
    type Err = SugarError;

    /// Parses `hash` or `fifo`, ignoring ASCII case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(Self::Hash),
            "fifo" | "linked" => Ok(Self::Fifo),
            _ => Err(SugarError::parse::<Self>(input)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Hash => "hash",
            Self::Fifo => "fifo",
        })
    }
}

// =============================================================================
// CollectionFactory
// =============================================================================

/// Chooses the backing store of new sets and maps.
///
/// # Examples
///
/// ```rust
/// use indolent::factory::{CollectionFactory, Layout};
///
/// let factory = CollectionFactory::new(Layout::Fifo, Layout::Hash);
/// assert_eq!(factory.set_layout(), Layout::Fifo);
/// assert_eq!(CollectionFactory::default(), CollectionFactory::baseline());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionFactory {
    set_layout: Layout,
    map_layout: Layout,
}

impl CollectionFactory {
    /// Creates a factory with explicit layouts.
    #[inline]
    pub const fn new(set_layout: Layout, map_layout: Layout) -> Self {
        Self {
            set_layout,
            map_layout,
        }
    }

    /// The default strategy: hash stores for both sets and maps.
    #[inline]
    pub const fn baseline() -> Self {
        Self::new(Layout::Hash, Layout::Hash)
    }

    /// Insertion-ordered stores for both sets and maps.
    #[inline]
    pub const fn fifo() -> Self {
        Self::new(Layout::Fifo, Layout::Fifo)
    }

    /// Returns a copy with another set layout.
    #[inline]
    pub const fn with_set_layout(self, set_layout: Layout) -> Self {
        Self { set_layout, ..self }
    }

    /// Returns a copy with another map layout.
    #[inline]
    pub const fn with_map_layout(self, map_layout: Layout) -> Self {
        Self { map_layout, ..self }
    }

    /// The layout of new sets.
    #[inline]
    pub const fn set_layout(&self) -> Layout {
        self.set_layout
    }

    /// The layout of new maps.
    #[inline]
    pub const fn map_layout(&self) -> Layout {
        self.map_layout
    }

    /// Creates an empty list.
    #[inline]
    pub fn new_list<T>(&self) -> Slist<T> {
        Slist::new()
    }

    /// Creates an empty set with this factory's set layout.
    #[inline]
    pub fn new_set<T: Eq + Hash>(&self) -> Sset<T> {
        Sset::from_store(SetStore::with_layout(self.set_layout))
    }

    /// Creates an empty map with this factory's map layout.
    #[inline]
    pub fn new_map<K: Eq + Hash, V>(&self) -> Smap<K, V> {
        Smap::from_store(MapStore::with_layout(self.map_layout))
    }

    /// Creates an empty insertion-ordered set.
    #[inline]
    pub fn new_fifo_set<T: Eq + Hash>(&self) -> Sset<T> {
        Sset::from_store(SetStore::with_layout(Layout::Fifo))
    }

    /// Creates an empty insertion-ordered map.
    #[inline]
    pub fn new_fifo_map<K: Eq + Hash, V>(&self) -> Smap<K, V> {
        Smap::from_store(MapStore::with_layout(Layout::Fifo))
    }

    /// Creates an empty set sorted by `comparator`.
    pub fn new_sorted_set<T, C>(&self, comparator: C) -> Sset<T>
    where
        T: Eq + Hash,
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        Sset::from_store(SetStore::sorted(Rc::new(comparator)))
    }

    /// Creates an empty map sorted by `comparator` on its keys.
    pub fn new_sorted_map<K, V, C>(&self, comparator: C) -> Smap<K, V>
    where
        K: Eq + Hash,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        Smap::from_store(MapStore::sorted(Rc::new(comparator)))
    }
}

impl Default for CollectionFactory {
    fn default() -> Self {
        Self::baseline()
    }
}

// =============================================================================
// Process-wide default
// =============================================================================

static CURRENT: RwLock<CollectionFactory> = parking_lot::const_rwlock(CollectionFactory::baseline());

/// Returns the process-wide factory.
#[inline]
pub fn current() -> CollectionFactory {
    *CURRENT.read()
}

/// Replaces the process-wide factory and returns the previous one.
///
/// Collections created earlier keep their stores.
pub fn install(factory: CollectionFactory) -> CollectionFactory {
    let previous = std::mem::replace(&mut *CURRENT.write(), factory);
    tracing::debug!(
        set_layout = %factory.set_layout,
        map_layout = %factory.map_layout,
        hasher = hasher_name(),
        "collection factory installed"
    );
    previous
}

/// Restores the baseline factory and returns the previous one.
pub fn reset() -> CollectionFactory {
    install(CollectionFactory::baseline())
}
