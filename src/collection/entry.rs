use std::fmt;

use crate::error::{SugarError, SugarResult};

/// A key/value snapshot with a write-through handle to the live value.
///
/// [`key`](Self::key) and [`val`](Self::val) are captured when the entry is
/// created. [`update`](Self::update) writes to the backing map, but the
/// captured `val` keeps its original value; read the live value with
/// [`current`](Self::current).
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let mut stock = smap! { "apples" => 3 };
/// for mut entry in stock.entries_mut() {
///     entry.update(entry.val() + 1);
///     assert_eq!(*entry.val(), 3);
///     assert_eq!(*entry.current(), 4);
/// }
/// assert_eq!(stock.opt(&"apples"), Opt::of(&4));
/// ```
pub struct Entry<'a, K, V> {
    key: K,
    val: V,
    slot: &'a mut V,
}

impl<'a, K, V> Entry<'a, K, V> {
    pub(crate) fn new(key: &K, slot: &'a mut V) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            key: key.clone(),
            val: slot.clone(),
            slot,
        }
    }

    /// The key captured at creation.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The value captured at creation. Not refreshed by [`update`](Self::update).
    #[inline]
    pub const fn val(&self) -> &V {
        &self.val
    }

    /// The live value in the backing map.
    #[inline]
    pub fn current(&self) -> &V {
        &*self.slot
    }

    /// Writes `value` through to the backing map.
    #[inline]
    pub fn update(&mut self, value: V) -> &mut Self {
        *self.slot = value;
        self
    }

    /// Always fails: replacing a value goes through [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Always returns [`SugarError::Unsupported`].
    pub fn set_value(&mut self, _value: V) -> SugarResult<V> {
        Err(SugarError::Unsupported {
            operation: "Entry::set_value",
            hint: "use Entry::update",
        })
    }

    /// Returns the captured key and value.
    #[inline]
    pub fn into_snapshot(self) -> (K, V) {
        (self.key, self.val)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Entry")
            .field("key", &self.key)
            .field("val", &self.val)
            .field("current", &self.slot)
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={}", self.key, self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_update_writes_through_but_snapshot_is_stale() {
        let mut live = 1;
        {
            let mut entry = Entry::new(&"k", &mut live);
            entry.update(2);
            assert_eq!(*entry.val(), 1);
            assert_eq!(*entry.current(), 2);
        }
        assert_eq!(live, 2);
    }

    #[rstest]
    fn test_set_value_is_unsupported() {
        let mut live = 1;
        let mut entry = Entry::new(&"k", &mut live);
        assert!(matches!(
            entry.set_value(5),
            Err(SugarError::Unsupported { .. })
        ));
        assert_eq!(*entry.current(), 1);
    }
}
