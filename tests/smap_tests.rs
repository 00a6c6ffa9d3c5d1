//! Integration tests for the map wrapper.

use indolent::prelude::*;
use rstest::rstest;

fn stock() -> Smap<&'static str, i32> {
    let mut map = Smap::with_layout(Layout::Fifo);
    map.push("pears", 4).push("apples", 3).push("plums", 0);
    map
}

// =============================================================================
// Lookup and mutation
// =============================================================================

#[rstest]
fn test_lookup() {
    let map = stock();
    assert_eq!(map.get(&"apples"), Some(&3));
    assert_eq!(map.opt(&"kiwis"), Opt::none());
    assert!(map.has(&"plums"));
    assert_eq!(map.len(), 3);
}

#[rstest]
fn test_push_replaces_and_keeps_position() {
    let mut map = stock();
    map.push("pears", 9);
    assert_eq!(map.keys().to_list(), slist!["pears", "apples", "plums"]);
    assert_eq!(map.opt(&"pears"), Opt::of(&9));
}

#[rstest]
fn test_push_if_absent_is_lazy() {
    let mut map = stock();
    map.push_if_absent("pears", || panic!("supplier must not run"))
        .push_if_absent("kiwis", || 7);
    assert_eq!(map.get(&"pears"), Some(&4));
    assert_eq!(map.get(&"kiwis"), Some(&7));
}

#[rstest]
fn test_push_opt_and_push_all() {
    let mut map: Smap<char, u8> = smap! {};
    map.push_opt('a', Opt::of(1))
        .push_opt('b', Opt::none())
        .push_all([('c', 3), ('d', 4)]);
    assert_eq!(map, smap! { 'a' => 1, 'c' => 3, 'd' => 4 });
}

#[rstest]
fn test_delete_variants() {
    let mut map = stock();
    map.delete(&"pears").delete_keys(["missing"]);
    assert_eq!(map.len(), 2);
    map.delete_where(|_, count| *count == 0);
    assert_eq!(map.keys().to_list(), slist!["apples"]);
}

#[rstest]
fn test_update_and_update_all() {
    let mut map = stock();
    map.update(&"apples", |count| count * 10).update(&"missing", |_| 1);
    assert_eq!(map.get(&"apples"), Some(&30));
    assert!(!map.has(&"missing"));

    map.update_all(|name, count| count + i32::try_from(name.len()).unwrap_or(0));
    assert_eq!(map.vals(), slist![9, 36, 5]);
}

// =============================================================================
// Entries
// =============================================================================

#[rstest]
fn test_entries_are_detached() {
    let mut map = stock();
    let entries = map.entries();
    map.push("apples", 100);
    assert_eq!(entries.opt(1), Opt::of(&("apples", 3)));
}

#[rstest]
fn test_entry_update_writes_through_with_stale_snapshot() {
    let mut map = stock();
    for mut entry in map.entries_mut() {
        let doubled = entry.val() * 2;
        entry.update(doubled);
        assert_eq!(*entry.val() * 2, *entry.current());
    }
    assert_eq!(map.vals(), slist![8, 6, 0]);
}

#[rstest]
fn test_entry_set_value_is_unsupported() {
    let mut map = stock();
    for mut entry in map.entries_mut() {
        assert!(matches!(
            entry.set_value(1),
            Err(SugarError::Unsupported { .. })
        ));
    }
    assert_eq!(map.get(&"pears"), Some(&4));
}

// =============================================================================
// Constructive transformation
// =============================================================================

#[rstest]
fn test_filter_is_constructive() {
    let map = stock();
    let in_stock = map.filter(|_, count| *count > 0);
    assert_eq!(in_stock.keys().to_list(), slist!["pears", "apples"]);
    assert_eq!(map.len(), 3);
}

#[rstest]
fn test_map_values_and_map_entries() {
    let map = stock();
    let labels = map.map_values(|count| format!("x{count}"));
    assert_eq!(labels.opt(&"pears").map(String::as_str), Opt::of("x4"));

    let inverted = map.map_entries(|name, count| (*count, name.len()));
    assert_eq!(inverted.keys().to_list(), slist![4, 3, 0]);
    assert_eq!(inverted.get(&3), Some(&6));
}

#[rstest]
fn test_flat_map_values_drops_absent() {
    let map = stock();
    let positive = map.flat_map_values(|_, count| Opt::of(*count).filter(|count| *count > 0));
    assert_eq!(positive.len(), 2);
    assert!(!positive.has(&"plums"));
}

#[rstest]
fn test_slice_skips_missing_keys() {
    let map = stock();
    let sliced = map.slice(["plums", "kiwis", "pears"]);
    assert_eq!(sliced.entries(), slist![("plums", 0), ("pears", 4)]);
    assert_eq!(map.len(), 3);
}

#[rstest]
fn test_map_at_leaves_receiver_unchanged() {
    let map = stock();
    let bumped = map.map_at(&"plums", |count| count + 1);
    assert_eq!(bumped.get(&"plums"), Some(&1));
    assert_eq!(map.get(&"plums"), Some(&0));
}

// =============================================================================
// Ordering and layouts
// =============================================================================

#[rstest]
fn test_order_sorts_by_key() {
    let ordered = stock().order();
    assert_eq!(ordered.keys().to_list(), slist!["apples", "pears", "plums"]);
    assert_eq!(ordered.store_kind(), "sorted");
}

#[rstest]
fn test_order_by_key_uses_derived_key() {
    let ordered = stock().order_by_key(|name| std::cmp::Reverse(name.len()));
    assert_eq!(ordered.keys().to_list(), slist!["apples", "pears"]);
}

#[rstest]
fn test_fifo_copy_of_sorted_map() {
    let ordered = stock().order();
    let fifo = ordered.fifo();
    assert_eq!(fifo.store_kind(), "fifo");
    assert_eq!(fifo.keys().to_list(), slist!["apples", "pears", "plums"]);
    assert_eq!(fifo, ordered);
    assert_eq!(ordered, fifo);
}

#[rstest]
fn test_new_uses_default_hash_layout() {
    let map: Smap<u8, u8> = Smap::new();
    assert_eq!(map.store_kind(), "hash");
    assert_eq!(map.keys().store_kind(), "hash");
}

// =============================================================================
// Traversal and conversion
// =============================================================================

#[rstest]
fn test_traversal() {
    let map = stock();
    assert!(map.any(|_, count| *count == 0));
    assert!(map.every(|name, _| name.starts_with('p') || name.starts_with('a')));
    assert_eq!(map.count_where(|name, _| name.starts_with('p')), 2);

    let mut seen = Vec::new();
    map.each(|name, _| seen.push(*name));
    assert_eq!(seen, ["pears", "apples", "plums"]);
}

#[rstest]
fn test_conversions() {
    let from_std: Smap<&str, i32> = std::collections::HashMap::from([("a", 1)]).into();
    assert_eq!(from_std, smap! { "a" => 1 });

    let collected: Smap<usize, char> = "xyz".chars().enumerate().collect();
    assert_eq!(collected.get(&2), Some(&'z'));

    let pairs: Vec<(&str, i32)> = stock().into_iter().collect();
    assert_eq!(pairs.len(), 3);
}

#[rstest]
fn test_display() {
    assert_eq!(stock().to_string(), "{pears: 4, apples: 3, plums: 0}");
}
