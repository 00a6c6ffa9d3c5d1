//! Type class traits for the sugared wrappers.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the contents of [`Opt`](crate::value::Opt)
//!   and [`Slist`](crate::collection::Slist)
//! - [`Foldable`]: reducing `Opt`, `Slist` and [`Sset`](crate::collection::Sset)
//!   to a summary value
//!
//! The wrappers' own inherent methods (`map`, `is_empty`, ...) take
//! precedence in method-call syntax; the traits exist so generic code can
//! abstract over the containers.
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! fn total<F: Foldable<Inner = i32>>(numbers: F) -> i32 {
//!     numbers.fold_left(0, |sum, n| sum + n)
//! }
//!
//! assert_eq!(total(slist![1, 2, 3]), 6);
//! assert_eq!(total(sset![4, 5]), 9);
//! assert_eq!(total(Opt::of(7)), 7);
//! assert_eq!(total(Opt::none()), 0);
//! ```

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
