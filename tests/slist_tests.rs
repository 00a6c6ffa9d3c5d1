//! Integration tests for the list wrapper.

use indolent::prelude::*;
use rstest::rstest;

// =============================================================================
// Negative indices
// =============================================================================

#[rstest]
fn test_negative_index_counts_from_the_end() {
    let list = slist![10, 20, 30, 40];
    assert_eq!(list.get(-1), list.get(3));
    assert_eq!(list.get(-4), Ok(&10));
    assert_eq!(
        list.get(-5),
        Err(SugarError::IndexOutOfBounds { index: -5, len: 4 })
    );
    assert_eq!(list.opt(-2), Opt::of(&30));
    assert_eq!(list.opt(4), Opt::none());
}

#[rstest]
fn test_sub_list_from_negative() {
    let list = slist!['a', 'b', 'c', 'd'];
    assert_eq!(list.sub_list_from(-2), list.sub_list(2, 4));
    assert_eq!(list.sub_list_from(-2), Ok(&['c', 'd'][..]));
    assert!(list.sub_list(3, 1).is_err());
    assert!(list.sub_list(0, 5).is_err());
}

#[rstest]
#[case(-100, 100, &[1, 2, 3][..])]
#[case(2, 1, &[][..])]
#[case(-2, 0, &[2, 3][..])]
#[case(1, -1, &[2][..])]
#[case(5, 9, &[][..])]
#[case(-2, -3, &[2, 3][..])]
fn test_narrow_never_fails(#[case] from: isize, #[case] to: isize, #[case] expected: &[i32]) {
    let list = slist![1, 2, 3];
    assert_eq!(list.narrow(from, to), expected);
}

#[rstest]
fn test_slice_is_detached() {
    let list = slist![1, 2, 3, 4];
    let mut middle = list.slice(1, -1);
    middle.push(99);
    assert_eq!(middle, slist![2, 3, 99]);
    assert_eq!(list, slist![1, 2, 3, 4]);
}

#[rstest]
fn test_push_at_and_update_at_accept_negative_indices() {
    let mut list = slist![1, 2, 4];
    list.push_at(-1, 3).unwrap();
    assert_eq!(list, slist![1, 2, 3, 4]);
    list.update_at(-1, |n| n * 10).update_at(17, |n| n * 0);
    assert_eq!(list, slist![1, 2, 3, 40]);
    assert!(list.push_at(9, 0).is_err());
}

// =============================================================================
// Mutation vs construction
// =============================================================================

#[rstest]
fn test_filter_leaves_receiver_unchanged() {
    let list = slist![1, 2, 3, 4];
    let evens = list.filter(|n| n % 2 == 0);
    assert_eq!(evens, slist![2, 4]);
    assert_eq!(list, slist![1, 2, 3, 4]);
    assert_eq!(list.take(|n| *n > 2), slist![3, 4]);
}

#[rstest]
fn test_delete_where_mutates_and_returns_same_instance() {
    let mut list = slist![1, 2, 3, 4];
    let address = std::ptr::from_ref(&list);
    let returned = std::ptr::from_ref(list.delete_where(|n| n % 2 == 0));
    assert_eq!(address, returned);
    assert_eq!(list, slist![1, 3]);
}

#[rstest]
fn test_delete_values_removes_every_occurrence() {
    let mut list = slist![1, 2, 1, 3, 2];
    list.delete_values([1, 2]);
    assert_eq!(list, slist![3]);

    let mut list = slist!["a", "b", "a"];
    list.delete(&"a");
    assert_eq!(list, slist!["b"]);
}

#[rstest]
fn test_push_variants() {
    let mut list = Slist::new();
    list.push(1)
        .push_if(2, |n| *n > 5)
        .push_opt(Opt::none())
        .push_opt(Opt::of(3))
        .push_all(4..=5);
    assert_eq!(list, slist![1, 3, 4, 5]);
}

// =============================================================================
// Grouping and ordering
// =============================================================================

#[rstest]
fn test_group_keeps_first_seen_key_order() {
    let pairs = slist![("b", 2), ("a", 1), ("b", 3)];
    let groups = pairs.group(|pair| pair.0);

    assert_eq!(groups.keys().to_list(), slist!["b", "a"]);
    assert_eq!(groups.opt(&"b").cloned(), Opt::of(slist![("b", 2), ("b", 3)]));
    assert_eq!(groups.opt(&"a").cloned(), Opt::of(slist![("a", 1)]));
}

#[rstest]
fn test_group_example_from_first_component() {
    let pairs = slist![("a", 1), ("b", 2), ("a", 3)];
    let groups = pairs.group(|pair| pair.0);
    let expected = smap! {
        "a" => slist![("a", 1), ("a", 3)],
        "b" => slist![("b", 2)],
    };
    assert_eq!(groups, expected);
    assert_eq!(groups.keys().to_list(), slist!["a", "b"]);
}

#[rstest]
fn test_order_variants_leave_receiver_unchanged() {
    let list = slist!["pear", "fig", "banana"];
    assert_eq!(list.order(), slist!["banana", "fig", "pear"]);
    assert_eq!(list.order_by_key(|word| word.len()), slist!["fig", "pear", "banana"]);
    assert_eq!(list.order_by(|a, b| b.cmp(a)), slist!["pear", "fig", "banana"]);
    assert_eq!(list, slist!["pear", "fig", "banana"]);
}

// =============================================================================
// Supplemented operations
// =============================================================================

#[rstest]
fn test_chunk() {
    assert_eq!(
        slist![1, 2, 3, 4, 5].chunk(2),
        Ok(slist![slist![1, 2], slist![3, 4], slist![5]])
    );
    assert!(matches!(
        slist![1].chunk(0),
        Err(SugarError::IllegalArgument { name: "size", .. })
    ));
}

#[rstest]
fn test_uniq_and_reverse() {
    let list = slist![3, 1, 3, 2, 1];
    assert_eq!(list.uniq(), slist![3, 1, 2]);
    assert_eq!(list.reverse(), slist![1, 2, 3, 1, 3]);
}

#[rstest]
fn test_head_last_tail() {
    let list = slist![1, 2, 3];
    assert_eq!(list.head(), Opt::of(&1));
    assert_eq!(list.last(), Opt::of(&3));
    assert_eq!(list.tail(), slist![2, 3]);
    assert_eq!(Slist::<i32>::new().tail(), Slist::new());
}

#[rstest]
fn test_indexed_operations() {
    let list = slist!['a', 'b', 'c'];
    assert_eq!(list.map_indexed(|i, c| format!("{i}{c}")).join(","), "0a,1b,2c");
    assert_eq!(list.filter_indexed(|i, _| i != 1), slist!['a', 'c']);
    assert_eq!(list.index_where(|c| *c > 'a'), Opt::of(1));
    assert_eq!(list.last_index_where(|c| *c > 'a'), Opt::of(2));
}

#[rstest]
fn test_conversions() {
    let list = slist![1, 2, 2];
    assert_eq!(list.to_set(), sset![1, 2]);
    let squares = list.to_map(|n| (*n, n * n));
    assert_eq!(squares.opt(&2), Opt::of(&4));
    assert_eq!(list.join("-"), "1-2-2");
    assert_eq!(list.to_string(), "[1, 2, 2]");
    assert_eq!(Slist::new().or_else(slist![0]), slist![0]);
}
