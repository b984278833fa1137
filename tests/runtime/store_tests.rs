//! Integration tests for the variable store

use blockscript_foundation::{Error, Value};
use blockscript_runtime::{RuntimeContext, VariableStore};

fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(ToString::to_string).collect())
}

// =============================================================================
// Substitution
// =============================================================================

#[test]
fn substitutes_embedded_references() {
    let mut store = VariableStore::new();
    store.set_value("A", "1");
    store.set_capture("B", "2");
    assert_eq!(store.substitute("<A><B>"), "12");
    assert_eq!(store.substitute("x<A>y"), "x1y");
}

#[test]
fn indexes_lists() {
    let mut store = VariableStore::new();
    store.set_value("L", list(&["10", "20", "30"]));
    assert_eq!(store.substitute("<L[0]>"), "10");
    assert_eq!(store.substitute("<L[-3]>"), "10");
    assert_eq!(store.substitute("<L[-4]>"), "<L[-4]>");
    assert_eq!(store.substitute("<L[x]>"), "<L[x]>");
    assert_eq!(store.substitute("<L>"), "[10, 20, 30]");
}

#[test]
fn indexing_a_scalar_is_left_verbatim() {
    let mut store = VariableStore::new();
    store.set_value("S", "5");
    assert_eq!(store.substitute("<S[0]>"), "<S[0]>");
}

#[test]
fn substitution_is_single_pass() {
    let mut store = VariableStore::new();
    store.set_value("A", "<B>");
    store.set_value("B", "7");
    assert_eq!(store.substitute("<A>"), "<B>");
}

// =============================================================================
// Bindings
// =============================================================================

#[test]
fn a_name_lives_in_one_partition() {
    let mut store = VariableStore::new();
    store.set_value("N", "1");
    store.set_capture("N", "2");
    assert_eq!(store.len(), 1);
    assert!(store.is_capture("N"));
    assert_eq!(store.variables().count(), 0);
}

#[test]
fn iteration_is_name_ordered() {
    let mut store = VariableStore::new();
    for name in ["c", "a", "b"] {
        store.set_value(name, name);
    }
    let names: Vec<&String> = store.variables().map(|(k, _)| k).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn remove_and_clear() {
    let mut store = VariableStore::new();
    store.set_value("A", "1");
    store.set_capture("B", "2");
    assert_eq!(store.remove("B"), Some(Value::from("2")));
    assert_eq!(store.remove("B"), None);
    store.log("line");
    store.clear();
    assert!(store.is_empty());
    assert!(store.logs().is_empty());
}

#[test]
fn clones_are_independent() {
    let mut store = VariableStore::new();
    store.set_value("A", "1");
    let snapshot = store.clone();
    store.set_value("A", "2");
    assert_eq!(snapshot.get("A"), Some(&Value::from("1")));
    assert_eq!(store.get("A"), Some(&Value::from("2")));
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshot_round_trip() {
    let mut store = VariableStore::new();
    store.set_value("X", "4");
    store.set_value("L", list(&["a", "b"]));
    store.set_capture("T", "tok");
    let restored = VariableStore::from_snapshot(&store.to_snapshot().unwrap()).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn garbage_snapshot_fails() {
    let err = VariableStore::from_snapshot(b"not a snapshot").unwrap_err();
    assert!(matches!(err, Error::Snapshot(_)));
}
