//! # indolent
//!
//! Fluent, chainable sugar over Rust's collections and primitives.
//!
//! ## Overview
//!
//! This library wraps the standard collections in thin, chainable types so
//! that everyday data shuffling reads as one expression. It includes:
//!
//! - **Values**: [`Opt`](value::Opt) optional wrapper, [`Var`](value::Var)
//!   mutable cell, positional tuples
//! - **Lazy Iteration**: [`SIter`](iter::SIter) with idempotent `has_next`,
//!   `map`, `filter` and `flat`
//! - **Collections**: [`Slist`](collection::Slist),
//!   [`Sset`](collection::Sset) and [`Smap`](collection::Smap) with `push`,
//!   `delete`, `group`, `order` and set algebra
//! - **Factory**: pluggable backing layouts (hash, FIFO, sorted)
//! - **Text**: numeric parsing helpers and a regex matcher wrapper
//! - **Expressions**: `when`/`matching` expression builders
//! - **Type Classes**: `Functor` and `Foldable` for the wrappers
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable)
//! - `regex`: The regex matcher wrapper
//! - `serde`: Serialization of the wrappers as plain collections
//! - `fxhash` / `ahash`: Faster hashers for every hash and FIFO store
//! - `full`: Enable `typeclass`, `regex` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! let mut numbers = slist![3, 1, 4, 1, 5, 9, 2, 6];
//! numbers.push(5).delete_where(|n| *n == 1);
//!
//! let evens = numbers.filter(|n| n % 2 == 0).order();
//! assert_eq!(evens, slist![2, 4, 6]);
//!
//! let doubled_head = numbers.head().map(|n| n * 2).or(0);
//! assert_eq!(doubled_head, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrappers, the capability traits and the literal macros.
///
/// # Usage
///
/// ```rust
/// use indolent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::error::{SugarError, SugarResult};
    pub use crate::expr::*;
    pub use crate::factory::{CollectionFactory, Layout};
    pub use crate::iter::*;
    pub use crate::text::*;
    pub use crate::value::*;
    pub use crate::{slist, smap, sset};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod collection;
pub mod error;
pub mod expr;
pub mod factory;
pub mod iter;
pub mod text;
pub mod value;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn prelude_reaches_every_layer() {
        let mut list = slist![1, 2, 3];
        list.push(4);
        let total: i32 = list.iter().filter(|n| **n > 1).map(|n| *n).sum();
        assert_eq!(total, 9);
        assert_eq!(parse_int("7"), Opt::of(7));
    }
}
