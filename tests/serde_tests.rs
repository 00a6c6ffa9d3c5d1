#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! The wrappers serialize as the plain collections they wrap.

use indolent::factory::{CollectionFactory, Layout};
use indolent::prelude::*;
use rstest::rstest;

// =============================================================================
// Values
// =============================================================================

#[rstest]
fn test_opt_is_transparent() {
    assert_eq!(serde_json::to_string(&Opt::of(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&Opt::<i32>::none()).unwrap(), "null");

    let restored: Opt<String> = serde_json::from_str("\"x\"").unwrap();
    assert_eq!(restored, Opt::of(String::from("x")));
    let absent: Opt<String> = serde_json::from_str("null").unwrap();
    assert!(absent.is_empty());
}

#[rstest]
fn test_tuple_json_roundtrip() {
    let pair = Tuple2::new("left".to_string(), 2);
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"{"first":"left","second":2}"#);

    let restored: Tuple2<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, pair);

    let triple = Tuple3::new(1, 'b', 3.5);
    let restored: Tuple3<i32, char, f64> =
        serde_json::from_str(&serde_json::to_string(&triple).unwrap()).unwrap();
    assert_eq!(restored, triple);
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn test_slist_serializes_as_array() {
    let list = slist![3, 1, 2];
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[3,1,2]");

    let restored: Slist<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn test_sset_serializes_in_iteration_order() {
    let set = sset![30, 10, 20].order();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[10,20,30]");
}

#[rstest]
fn test_sset_json_roundtrip() {
    let set = sset!["a".to_string(), "b".to_string()];
    let restored: Sset<String> =
        serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
    assert_eq!(restored, set);
    assert_eq!(restored.store_kind(), "hash");
}

#[rstest]
fn test_sset_deserialize_merges_duplicates() {
    let restored: Sset<i32> = serde_json::from_str("[1,1,2]").unwrap();
    assert_eq!(restored.len(), 2);
}

#[rstest]
fn test_smap_serializes_as_object() {
    let mut map = Smap::with_layout(Layout::Fifo);
    map.push("b".to_string(), 2).push("a".to_string(), 1);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":2,"a":1}"#);

    let restored: Smap<String, i32> = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
    assert_eq!(restored, map);
}

#[rstest]
fn test_nested_wrappers_roundtrip() {
    let mut groups: Smap<String, Slist<Opt<i32>>> = Smap::new();
    groups.push("odd".to_string(), slist![Opt::of(1), Opt::none()]);
    let json = serde_json::to_string(&groups).unwrap();
    assert_eq!(json, r#"{"odd":[1,null]}"#);

    let restored: Smap<String, Slist<Opt<i32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, groups);
}

// =============================================================================
// Factory configuration
// =============================================================================

#[rstest]
fn test_factory_json_roundtrip() {
    let factory = CollectionFactory::new(Layout::Fifo, Layout::Hash);
    let json = serde_json::to_string(&factory).unwrap();
    assert_eq!(json, r#"{"set_layout":"fifo","map_layout":"hash"}"#);

    let restored: CollectionFactory = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, factory);
}

#[rstest]
fn test_layout_rejects_unknown_name() {
    assert!(serde_json::from_str::<Layout>("\"tree\"").is_err());
}
