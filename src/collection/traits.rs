//! Capability traits shared by the collection wrappers.
//!
//! Each trait covers one capability. Mutating capabilities (`push`,
//! `delete`) work in place and return `&mut Self` so calls chain; the others
//! build a new collection and leave the receiver untouched.

use std::cmp::Ordering;
use std::hash::Hash;

use super::Smap;
use crate::value::Opt;

// =============================================================================
// Pushable
// =============================================================================

/// Collections that accept new elements in place.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let mut list = Slist::new();
/// list.push(1)
///     .push_if(2, |n| n % 2 == 1)
///     .push_opt(Opt::of(3))
///     .push_all([4, 5]);
/// assert_eq!(list, slist![1, 3, 4, 5]);
/// ```
pub trait Pushable<T> {
    /// Adds `value`.
    fn push(&mut self, value: T) -> &mut Self;

    /// Adds `value` only when it satisfies `predicate`.
    fn push_if<P>(&mut self, value: T, predicate: P) -> &mut Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            self.push(value)
        } else {
            self
        }
    }

    /// Adds the held value, if any.
    fn push_opt(&mut self, value: Opt<T>) -> &mut Self {
        match value.into_option() {
            Some(value) => self.push(value),
            None => self,
        }
    }

    /// Adds every value of `values`.
    fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value);
        }
        self
    }
}

// =============================================================================
// Deletable
// =============================================================================

/// Collections that remove elements in place.
pub trait Deletable<T> {
    /// Removes every element matching `predicate`.
    fn delete_where<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool;

    /// Removes every element equal to one of `values`.
    fn delete_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let doomed: Vec<T> = values.into_iter().collect();
        self.delete_where(|element| doomed.contains(element))
    }

    /// Removes every element equal to `value`.
    fn delete(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.delete_where(|element| element == value)
    }
}

// =============================================================================
// Filterable
// =============================================================================

/// Collections that can produce a filtered copy of themselves.
pub trait Filterable<T>: Sized {
    /// Returns a new collection with the elements matching `predicate`.
    ///
    /// The receiver is left unchanged.
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool;

    /// Alias of [`filter`](Self::filter).
    fn take<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(predicate)
    }

    /// Counts the elements matching `predicate`.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool;
}

// =============================================================================
// Groupable
// =============================================================================

/// Collections that can be partitioned by a key.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let words = slist!["apple", "bean", "avocado", "beet", "corn"];
/// let by_initial = words.group(|word| word.chars().next().unwrap_or_default());
///
/// assert_eq!(by_initial.keys().to_list(), slist!['a', 'b', 'c']);
/// assert_eq!(by_initial.opt(&'b').cloned(), Opt::of(slist!["bean", "beet"]));
/// ```
pub trait Groupable<T>: Sized {
    /// Groups the elements by `key`.
    ///
    /// Keys keep the order in which they were first seen and every group
    /// keeps the encounter order of its elements.
    fn group<K, F>(&self, key: F) -> Smap<K, Self>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;
}

// =============================================================================
// Orderable
// =============================================================================

/// Collections that can produce a sorted copy of themselves.
pub trait Orderable<T>: Sized {
    /// Returns a copy sorted by `comparator`.
    ///
    /// Elements the comparator reports as equal collapse in sets and maps,
    /// so it should agree with `Eq` there.
    fn order_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static;

    /// Returns a copy sorted by the key extracted with `key`.
    fn order_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.order_by(move |left, right| key(left).cmp(&key(right)))
    }

    /// Returns a copy sorted by natural order.
    fn order(&self) -> Self
    where
        T: Ord + 'static,
    {
        self.order_by(T::cmp)
    }
}
