//! Lazy iteration.
//!
//! [`SIter`] wraps a [`Cursor`]: an iterator that can be asked whether it has
//! another element any number of times without consuming it. Adapters are
//! lazy and fused; nothing upstream runs until an element is pulled.
//!
//! # Examples
//!
//! ```rust
//! use indolent::iter::SIter;
//!
//! let mut pairs = SIter::of(["a", "b"]).flat(|tag| [format!("{tag}1"), format!("{tag}2")]);
//!
//! assert!(pairs.has_next());
//! assert_eq!(pairs.next().as_deref(), Some("a1"));
//! assert_eq!(pairs.list().into_vec(), vec!["a2", "b1", "b2"]);
//! ```

mod cursor;
mod siter;

pub use cursor::{
    Cursor, EachCursor, FilterCursor, FlatCursor, Generator, MapCursor, Source, Stepper,
};
pub use siter::{IteratorExt, SIter};
