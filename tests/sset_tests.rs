//! Integration tests for the set wrapper.

use indolent::prelude::*;
use rstest::rstest;

fn fifo_of<const N: usize>(values: [i32; N]) -> Sset<i32> {
    let mut set = Sset::with_layout(Layout::Fifo);
    set.push_all(values);
    set
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_union_intersect_diff() {
    let left = sset![1, 2, 3];
    let right = [2, 3, 4];

    assert_eq!(left.union(right), sset![1, 2, 3, 4]);
    assert_eq!(left.intersect(right), sset![2, 3]);
    assert_eq!(left.diff(right), sset![1, 4]);
    assert_eq!(left, sset![3, 2, 1]);
}

#[rstest]
fn test_algebra_with_empty_sets() {
    let empty: Sset<i32> = sset![];
    assert_eq!(empty.union([1]), sset![1]);
    assert!(sset![1, 2].intersect([]).is_empty());
    assert_eq!(sset![1, 2].diff([]), sset![1, 2]);
}

#[rstest]
fn test_intersect_keeps_receiver_order() {
    let set = fifo_of([5, 4, 3, 2, 1]);
    assert_eq!(set.intersect([1, 3, 5]).to_list(), slist![5, 3, 1]);
}

// =============================================================================
// Capabilities
// =============================================================================

#[rstest]
fn test_push_ignores_duplicates() {
    let mut set = sset!["a"];
    set.push("a").push("b").push_if("c", |_| false);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&"b"));
    assert!(!set.contains(&"c"));
}

#[rstest]
fn test_delete_variants_mutate_in_place() {
    let mut set = sset![1, 2, 3, 4, 5, 6];
    set.delete(&1).delete_values([2, 3]).delete_where(|n| *n > 5);
    assert_eq!(set, sset![4, 5]);
}

#[rstest]
fn test_filter_leaves_receiver_unchanged() {
    let set = sset![1, 2, 3, 4];
    let even = set.filter(|n| n % 2 == 0);
    assert_eq!(even, sset![2, 4]);
    assert_eq!(set.len(), 4);
    assert_eq!(set.count_where(|n| *n > 2), 2);
}

#[rstest]
fn test_group_by_parity() {
    let groups = fifo_of([1, 2, 3, 4, 5]).group(|n| n % 2 == 0);
    assert_eq!(groups.keys().to_list(), slist![false, true]);
    assert_eq!(groups.opt(&false).map(|odd| odd.to_list()), Opt::of(slist![1, 3, 5]));
    assert_eq!(groups.opt(&true).map(|even| even.to_list()), Opt::of(slist![2, 4]));
}

// =============================================================================
// Layouts and ordering
// =============================================================================

#[rstest]
#[case(Layout::Hash, "hash")]
#[case(Layout::Fifo, "fifo")]
fn test_with_layout_store_kind(#[case] layout: Layout, #[case] expected: &str) {
    let set: Sset<u8> = Sset::with_layout(layout);
    assert_eq!(set.store_kind(), expected);
    assert_eq!(set.filter(|_| true).store_kind(), expected);
}

#[rstest]
fn test_fifo_set_keeps_insertion_order() {
    let set = fifo_of([3, 1, 2, 1]);
    assert_eq!(set.to_list(), slist![3, 1, 2]);
    assert_eq!(set.join("-"), "3-1-2");
}

#[rstest]
fn test_order_by_descending() {
    let set = fifo_of([2, 9, 4]);
    let ordered = set.order_by(|left: &i32, right: &i32| right.cmp(left));
    assert_eq!(ordered.to_list(), slist![9, 4, 2]);
    assert_eq!(ordered.store_kind(), "sorted");
    assert_eq!(set.to_list(), slist![2, 9, 4]);
}

#[rstest]
fn test_sorted_set_stays_sorted_on_push() {
    let mut ordered = sset![10, 30].order();
    ordered.push(20).push(5);
    assert_eq!(ordered.to_list(), slist![5, 10, 20, 30]);
}

#[rstest]
fn test_equality_across_layouts_is_symmetric() {
    let descending = Sset::sorted_by(|left: &i32, right: &i32| right.cmp(left)).union([1, -1, 7]);
    let hashed = Sset::with_layout(Layout::Hash).union([7, 1, -1]);
    assert_eq!(descending, hashed);
    assert_eq!(hashed, descending);

    let fewer = Sset::with_layout(Layout::Hash).union([7, 1]);
    assert_ne!(descending, fewer);
    assert_ne!(fewer, descending);
}

#[rstest]
fn test_order_by_key_merges_equal_keys() {
    let words = Sset::with_layout(Layout::Fifo).union(["bb", "a", "cc"]);
    let by_len = words.order_by_key(|word| word.len());
    assert_eq!(by_len.to_list(), slist!["a", "bb"]);
}

#[rstest]
fn test_map_of_sorted_set_becomes_fifo() {
    let mapped = sset![1, 2, 3].order().map(|n| n * n);
    assert_eq!(mapped.store_kind(), "fifo");
    assert_eq!(mapped.to_list(), slist![1, 4, 9]);
}

#[rstest]
fn test_map_of_hash_set_stays_hash() {
    let mapped = Sset::with_layout(Layout::Hash).union([1, -1, 2]).map(|n: &i32| n.abs());
    assert_eq!(mapped.store_kind(), "hash");
    assert_eq!(mapped, sset![1, 2]);
}

// =============================================================================
// Supplemented operations
// =============================================================================

#[rstest]
fn test_flat_map_and_flat() {
    let set = fifo_of([1, 2]);
    assert_eq!(set.flat_map(|n| [*n, n * 10]).to_list(), slist![1, 10, 2, 20]);

    let nested = Sset::with_layout(Layout::Fifo).union([vec!['a', 'b'], vec!['b', 'c']]);
    assert_eq!(nested.flat().to_list(), slist!['a', 'b', 'c']);
}

#[rstest]
fn test_tail_and_or_else() {
    assert_eq!(fifo_of([7, 8, 9]).tail().to_list(), slist![8, 9]);
    assert!(fifo_of([7]).tail().is_empty());

    let empty: Sset<i32> = sset![];
    assert_eq!(empty.or_else(sset![1]), sset![1]);
    assert_eq!(sset![2].or_else(sset![1]), sset![2]);
}

#[rstest]
fn test_traversal() {
    let set = sset![2, 4, 6];
    assert!(set.every(|n| n % 2 == 0));
    assert!(set.any(|n| *n == 4));
    assert!(!set.any(|n| *n == 5));

    let mut total = 0;
    set.each(|n| total += n);
    assert_eq!(total, 12);
    assert_eq!(set.iter().count(), 3);
}

#[rstest]
fn test_conversions() {
    let from_std: Sset<i32> = std::collections::HashSet::from([1, 2]).into();
    assert_eq!(from_std, sset![1, 2]);

    let collected: Sset<char> = "abca".chars().collect();
    assert_eq!(collected.len(), 3);

    let mut extended = sset![1];
    extended.extend([1, 2, 3]);
    assert_eq!(extended, Sset::from([1, 2, 3]));
}

#[rstest]
fn test_display_of_sorted_set() {
    let set = sset![3, 1, 2].order();
    assert_eq!(set.to_string(), "{1, 2, 3}");
}
