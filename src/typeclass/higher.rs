//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Opt<_>` or `Slist<_>` as type constructors
//! directly. [`TypeConstructor`] names the applied type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`).

use crate::collection::{Slist, Sset};
use crate::value::Opt;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let names: Slist<String> = emptied(slist![1, 2]);
/// assert!(names.is_empty());
/// ```
pub trait TypeConstructor {
    /// The type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Opt<A> {
    type Inner = A;
    type WithType<B> = Opt<B>;
}

impl<T> TypeConstructor for Slist<T> {
    type Inner = T;
    type WithType<B> = Slist<B>;
}

impl<T> TypeConstructor for Sset<T> {
    type Inner = T;
    type WithType<B> = Sset<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Opt<i32>>();
    }

    #[test]
    fn slist_with_type_swaps_the_element() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<<Slist<i32> as TypeConstructor>::WithType<String>>();
    }
}
