//! In-place edits: set, set_path, delete, and aliasing between wrappers.

use anyvalue::{GenericValue, Map, Sequence, Value};
use serde_json::json;

#[test]
fn set_creates_intermediate_maps() {
    let mut root = GenericValue::new();
    root.set("a.b.c", 5);
    assert_eq!(root.path("a.b.c").as_int(0), 5);
    assert!(root.path("a.b").as_map(None).contains_key("c"));
    assert!(root.path("a").is_map());
}

#[test]
fn set_replaces_scalar_intermediate() {
    let mut root = GenericValue::new();
    root.set("x", 1);
    root.set("x.y", 2);
    assert!(root.child("x").is_map());
    assert_eq!(root.path("x.y").as_int(-1), 2);
}

#[test]
fn set_replaces_sequence_intermediate() {
    let mut root = GenericValue::from_raw(json!({"list": [1, 2]}));
    root.set("list.first", "one");
    assert!(root.child("list").is_map());
    assert_eq!(root.path("list.first").as_string(None), "one");
}

#[test]
fn set_overwrites_in_place_keeping_order() {
    let mut root = GenericValue::from_raw(json!({"a": 1, "b": 2, "c": 3}));
    root.set("b", "two");
    assert_eq!(root.as_map(None).keys(), vec!["a", "b", "c"]);
    assert_eq!(
        root.to_json().unwrap(),
        br#"{"a":1,"b":"two","c":3}"#.to_vec()
    );
}

#[test]
fn set_calls_chain() {
    let mut root = GenericValue::new();
    root.set("host", "localhost").set("port", 6379u16).set("tls", false);
    assert_eq!(root.child("port").as_uint64(None), 6379);
    assert!(!root.child("tls").as_bool(true));
}

#[test]
fn set_on_absent_wrapper_builds_a_map() {
    let mut missing = GenericValue::from_raw(json!({})).child("nope");
    assert!(missing.is_absent());
    missing.set("k", 1);
    assert!(missing.is_map());
    assert_eq!(missing.child("k").as_int(None), 1);
}

#[test]
fn set_path_with_dotted_segment() {
    let mut root = GenericValue::new();
    root.set_path(["labels", "app.kubernetes.io/name"], "web");
    assert_eq!(
        root.child("labels")
            .child("app.kubernetes.io/name")
            .as_string(None),
        "web"
    );
    assert!(root.path("labels.app").is_absent());
}

#[test]
fn set_accepts_containers_and_wrappers() {
    let mut root = GenericValue::new();
    let tags: Sequence = ["a", "b"].into_iter().collect();
    root.set("tags", tags);
    let inner: Map = [("k", 1i64)].into_iter().collect();
    root.set("inner", inner);
    let handle = root.child("inner");
    root.set("copy", handle);

    assert_eq!(root.child("tags").as_string_sequence(None), vec!["a", "b"]);
    root.path("inner").set("added", true);
    assert!(root.path("copy.added").as_bool(false));
}

#[test]
fn writes_through_child_reach_parent() {
    let root = GenericValue::from_raw(json!({"db": {"pool": {"size": 4}}}));
    let mut pool = root.path("db.pool");
    pool.set("size", 8);
    pool.set("idle.timeout", 30);
    assert_eq!(root.path("db.pool.size").as_int(None), 8);
    assert_eq!(root.path("db.pool.idle.timeout").as_int(None), 30);
}

#[test]
fn deep_clone_does_not_alias() {
    let root = GenericValue::from_raw(json!({"db": {"pool": 4}}));
    let mut copy = root.deep_clone();
    copy.set("db.pool", 16);
    assert_eq!(root.path("db.pool").as_int(None), 4);
    assert_eq!(copy.path("db.pool").as_int(None), 16);
}

#[test]
fn delete_is_lenient() {
    let root = GenericValue::from_raw(json!({"k": 1, "keep": 2}));
    root.delete("missing");
    root.delete("k");
    assert!(root.child("k").is_absent());
    assert_eq!(root.child("keep").as_int(None), 2);

    GenericValue::from_raw("scalar").delete("k");
    GenericValue::from_raw(Value::Null).delete("k");
    GenericValue::from_raw(vec![1i64, 2]).delete("0");
    GenericValue::absent().delete("k");
}

#[test]
fn delete_through_child_wrapper() {
    let root = GenericValue::from_raw(json!({"a": {"b": 1, "c": 2}}));
    root.child("a").delete("b");
    assert_eq!(root.child("a").as_map(None).keys(), vec!["c"]);
}

#[test]
fn storing_absent_yields_null() {
    let mut root = GenericValue::new();
    root.set("gone", GenericValue::absent());
    root.set("also", Value::Absent);
    assert!(root.child("gone").is_null());
    assert!(root.child("also").is_null());
    assert_eq!(root.to_json().unwrap(), br#"{"gone":null,"also":null}"#.to_vec());
}

#[test]
fn absent_never_lands_in_a_sequence() {
    let root = GenericValue::from_raw(json!({"list": ["a"]}));
    let list = root.child("list").try_sequence().unwrap();
    list.push(GenericValue::absent());
    assert!(root.child("list").index(1).is_null());
    assert_eq!(root.child("list").as_string_sequence(None), vec!["a", ""]);
    assert_eq!(root.to_json().unwrap(), br#"{"list":["a",null]}"#.to_vec());
}
