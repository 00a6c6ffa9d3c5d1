//! Expression builders for multi-way conditionals.
//!
//! - [`when`]: an `if / else if / else` chain that evaluates to a value
//! - [`matching`]: the same chain with every condition testing one context value
//! - [`Match`]: partial functions `&C -> Opt<V>` completed with a default

mod matching;
mod when;

pub use matching::{Match, MatchArm, MatchCase, MatchThen, Matching, matching};
pub use when::{Case, Then, When, when, when_with};
