//! Hasher selection for hash and FIFO stores.
//!
//! The `fxhash` feature switches every store to `rustc-hash`, the `ahash`
//! feature to `ahash`. Without either, the standard library's `RandomState`
//! is used. `fxhash` wins when both are enabled.

/// The hash builder shared by every hash and FIFO store.
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder shared by every hash and FIFO store.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// The hash builder shared by every hash and FIFO store.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::collections::hash_map::RandomState;

/// Returns the name of the hasher selected at build time.
///
/// # Examples
///
/// ```rust
/// use indolent::factory::hasher_name;
///
/// assert!(["std", "fxhash", "ahash"].contains(&hasher_name()));
/// ```
#[must_use]
pub const fn hasher_name() -> &'static str {
    if cfg!(feature = "fxhash") {
        "fxhash"
    } else if cfg!(feature = "ahash") {
        "ahash"
    } else {
        "std"
    }
}
