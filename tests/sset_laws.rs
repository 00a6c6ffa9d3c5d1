//! Property-based tests for set algebra.

use indolent::collection::{Pushable, Sset};
use indolent::factory::Layout;
use proptest::prelude::*;

fn any_members() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..24)
}

fn fifo_set(members: &[u8]) -> Sset<u8> {
    let mut set = Sset::with_layout(Layout::Fifo);
    set.push_all(members.iter().copied());
    set
}

proptest! {
    #[test]
    fn prop_union_contains_both_sides(left in any_members(), right in any_members()) {
        let union = fifo_set(&left).union(right.iter().copied());
        prop_assert!(left.iter().chain(&right).all(|member| union.contains(member)));
    }

    #[test]
    fn prop_intersect_is_union_minus_diff(left in any_members(), right in any_members()) {
        let set = fifo_set(&left);
        let union = set.union(right.iter().copied());
        let diff = set.diff(right.iter().copied());
        let intersect = set.intersect(right.iter().copied());

        prop_assert_eq!(intersect.len() + diff.len(), union.len());
        prop_assert!(intersect.every(|member| !diff.contains(member)));
    }

    #[test]
    fn prop_diff_is_symmetric(left in any_members(), right in any_members()) {
        prop_assert_eq!(
            fifo_set(&left).diff(right.iter().copied()),
            fifo_set(&right).diff(left.iter().copied())
        );
    }

    #[test]
    fn prop_layout_does_not_affect_equality(members in any_members()) {
        let mut hashed = Sset::with_layout(Layout::Hash);
        hashed.push_all(members.iter().rev().copied());
        prop_assert_eq!(hashed, fifo_set(&members));
    }
}
