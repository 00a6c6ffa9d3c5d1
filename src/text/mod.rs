//! String helpers: numeric parsing and a regex matcher wrapper.
//!
//! Every parser comes in two flavours. The `as_*` family is strict and
//! returns a [`SugarResult`](crate::error::SugarResult); the `parse_*`
//! family swallows malformed input and returns [`Opt::none`](crate::value::Opt::none).
//!
//! # Examples
//!
//! ```rust
//! use indolent::prelude::*;
//!
//! assert_eq!(as_int("42"), Ok(42));
//! assert!(as_int("forty-two").is_err());
//! assert_eq!(parse_double("2.5"), Opt::of(2.5));
//! assert_eq!(parse_long("oops"), Opt::none());
//! ```

mod parse;
#[cfg(feature = "regex")]
mod matcher;

pub use parse::{
    as_bool, as_byte, as_double, as_float, as_int, as_long, as_short, parse_as, parse_bool,
    parse_byte, parse_double, parse_float, parse_int, parse_long, parse_opt, parse_short,
};
#[cfg(feature = "regex")]
pub use matcher::SMatcher;
