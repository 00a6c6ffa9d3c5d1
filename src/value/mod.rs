//! Value wrappers: the optional value, the mutable cell and positional tuples.
//!
//! # Examples
//!
//! ```rust
//! use indolent::value::{Opt, Tuple2, Var};
//!
//! let hits = Var::new(0);
//! let found = Opt::of(Tuple2::new("key", 1)).tap(|_| {
//!     hits.plus(1);
//! });
//!
//! assert!(found.test(|pair| *pair.first() == "key"));
//! assert_eq!(hits.get(), 1);
//! ```

mod cell;
mod opt;
pub mod tuple;

pub use cell::Var;
pub use opt::Opt;
pub use tuple::{MutTuple2, MutTuple3, Tuple2, Tuple3};
