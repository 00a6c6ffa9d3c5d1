//! Property-based tests for the optional-value wrapper.
//!
//! - `Opt::of(v).map(identity) == Opt::of(v)`
//! - `Opt::none().map(f)` is absent
//! - `flat_map` with `Opt::of` is `map`
//! - `or` returns the held value when present

use indolent::value::Opt;
use proptest::prelude::*;

fn any_opt() -> impl Strategy<Value = Opt<i32>> {
    any::<Option<i32>>().prop_map(Opt::from)
}

proptest! {
    #[test]
    fn prop_map_identity(value in any::<i32>()) {
        prop_assert_eq!(Opt::of(value).map(|x| x), Opt::of(value));
    }

    #[test]
    fn prop_map_on_absent_is_absent(offset in any::<i32>()) {
        let absent: Opt<i32> = Opt::none();
        prop_assert_eq!(absent.map(|x| x.wrapping_add(offset)), Opt::none());
    }

    #[test]
    fn prop_map_composition(value in any_opt()) {
        let add_one = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(value.map(add_one).map(double), value.map(|n| double(add_one(n))));
    }

    #[test]
    fn prop_flat_map_of_is_map(value in any_opt()) {
        let negate = |n: i32| n.wrapping_neg();
        prop_assert_eq!(value.flat_map(|n| Opt::of(negate(n))), value.map(negate));
    }

    #[test]
    fn prop_or_prefers_held_value(value in any_opt(), fallback in any::<i32>()) {
        let expected = value.into_option().unwrap_or(fallback);
        prop_assert_eq!(value.or(fallback), expected);
    }

    #[test]
    fn prop_filter_is_present_only_when_predicate_holds(value in any_opt()) {
        let filtered = value.filter(|n| n % 3 == 0);
        prop_assert_eq!(filtered.is_present(), value.test(|n| n % 3 == 0));
    }
}
