//! Mutable single-slot value cell.
//!
//! [`Var`] holds one value that can be replaced through a shared reference.
//! It exists for the places where a closure has to update a counter or
//! memoize a value that the enclosing scope reads afterwards.
//!
//! # Examples
//!
//! ```rust
//! use indolent::value::Var;
//!
//! let index = Var::new(0);
//! let labels: Vec<String> = ["a", "b", "c"]
//!     .iter()
//!     .map(|name| format!("{}:{name}", index.get_and_add(1)))
//!     .collect();
//!
//! assert_eq!(labels, vec!["0:a", "1:b", "2:c"]);
//! assert_eq!(index.get(), 3);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg};

use crate::value::Opt;

/// A mutable value slot shared by reference.
///
/// `Var` is `!Sync`: it is meant for single-threaded closures.
pub struct Var<T> {
    slot: RefCell<T>,
}

impl<T> Var<T> {
    /// Creates a cell holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            slot: RefCell::new(value),
        }
    }

    /// Returns a copy of the current value.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.slot.borrow().clone()
    }

    /// Overwrites the current value and returns the cell for chaining.
    #[inline]
    pub fn set(&self, value: T) -> &Self {
        self.slot.replace(value);
        self
    }

    /// Overwrites the current value.
    #[inline]
    pub fn accept(&self, value: T) {
        self.slot.replace(value);
    }

    /// Overwrites the current value and returns the previous one.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        self.slot.replace(value)
    }

    /// Reads the current value through a borrow.
    #[inline]
    pub fn with<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        function(&self.slot.borrow())
    }

    /// Returns the value as it was before `action` ran against this cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Var;
    ///
    /// let cell = Var::new(String::from("before"));
    /// let previous = cell.get_then(|cell| cell.accept(String::from("after")));
    /// assert_eq!(previous, "before");
    /// assert_eq!(cell.get(), "after");
    /// ```
    pub fn get_then<F>(&self, action: F) -> T
    where
        T: Clone,
        F: FnOnce(&Self),
    {
        let current = self.get();
        action(self);
        current
    }

    /// Consumes the cell and returns its value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T> Var<Option<T>> {
    /// Creates an empty cell.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(None)
    }

    /// Returns the current value as an [`Opt`].
    #[inline]
    pub fn opt(&self) -> Opt<T>
    where
        T: Clone,
    {
        Opt::from(self.get())
    }

    /// Runs `action` against the cell only while it is empty.
    pub fn init<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        let absent = self.slot.borrow().is_none();
        if absent {
            action(self);
        }
        self
    }

    /// Returns the current value, or stores and returns the result of
    /// `supplier` when the cell is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::value::Var;
    ///
    /// let cache: Var<Option<u32>> = Var::empty();
    /// assert_eq!(cache.or_accept(|| 7), 7);
    /// assert_eq!(cache.or_accept(|| 9), 7);
    /// ```
    pub fn or_accept<F>(&self, supplier: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        if let Some(current) = self.slot.borrow().as_ref() {
            return current.clone();
        }
        let value = supplier();
        self.slot.replace(Some(value.clone()));
        value
    }
}

// =============================================================================
// Numeric cells
// =============================================================================

impl<T: Copy> Var<T> {
    fn apply(&self, function: impl FnOnce(T) -> T) -> &Self {
        let current = *self.slot.borrow();
        self.slot.replace(function(current));
        self
    }

    /// Adds `delta` to the held value.
    #[inline]
    pub fn plus(&self, delta: T) -> &Self
    where
        T: Add<Output = T>,
    {
        self.apply(|current| current + delta)
    }

    /// Multiplies the held value by `factor`.
    #[inline]
    pub fn times(&self, factor: T) -> &Self
    where
        T: Mul<Output = T>,
    {
        self.apply(|current| current * factor)
    }

    /// Divides the held value by `divisor`.
    #[inline]
    pub fn divide_by(&self, divisor: T) -> &Self
    where
        T: Div<Output = T>,
    {
        self.apply(|current| current / divisor)
    }

    /// Negates the held value.
    #[inline]
    pub fn negate(&self) -> &Self
    where
        T: Neg<Output = T>,
    {
        self.apply(|current| -current)
    }

    /// Adds `delta` and returns the value from before the addition.
    #[inline]
    pub fn get_and_add(&self, delta: T) -> T
    where
        T: Add<Output = T>,
    {
        self.get_then(|cell| {
            cell.plus(delta);
        })
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T: Default> Default for Var<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Clone for Var<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T> From<T> for Var<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialEq> PartialEq for Var<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.slot.borrow() == *other.slot.borrow()
    }
}

impl<T: Eq> Eq for Var<T> {}

impl<T: PartialOrd> PartialOrd for Var<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.slot.borrow().partial_cmp(&*other.slot.borrow())
    }
}

impl<T: Ord> Ord for Var<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.slot.borrow().cmp(&*other.slot.borrow())
    }
}

impl<T: Hash> Hash for Var<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.borrow().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Var<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Var").field(&*self.slot.borrow()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Var<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.slot.borrow())
    }
}

static_assertions::assert_not_impl_any!(Var<i32>: Sync);
