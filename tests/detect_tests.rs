// tests/detect_tests.rs

use restful_sql::detect::{contains_array, find_nested, is_nested, nested_field_indexes};
use restful_sql::parse;
use serde_json::json;

// ============================================================================
// Raw fields arrays
// ============================================================================

#[test]
fn test_nested_entry_flagged() {
    let scan = find_nested(&json!(["b", ["OR", ["c"], [2]]]));
    assert_eq!(scan.count(), 1);
    assert_eq!(scan.indexes, vec![1]);
}

#[test]
fn test_plain_fields_not_flagged() {
    let scan = find_nested(&json!(["a", "b"]));
    assert_eq!(scan.count(), 0);
    assert!(scan.is_empty());
}

#[test]
fn test_indexes_in_discovery_order() {
    let scan = find_nested(&json!([
        ["OR", ["a"], [1]],
        "b",
        ["AND", ["c"], [2]]
    ]));
    assert_eq!(scan.indexes, vec![0, 2]);
}

#[test]
fn test_single_level_array_not_flagged() {
    // An array of scalars is not a candidate triple
    assert!(!is_nested(&json!(["x", "y"])));
    assert!(find_nested(&json!([["x", "y"]])).is_empty());
}

#[test]
fn test_malformed_candidate_still_flagged() {
    // Shape only; arity is checked when the entry is flattened
    assert!(is_nested(&json!([["c"]])));
    assert!(is_nested(&json!(["OR", ["c"]])));
}

#[test]
fn test_non_array_scans_empty() {
    assert!(find_nested(&json!("a")).is_empty());
    assert!(find_nested(&json!(null)).is_empty());
}

#[test]
fn test_contains_array() {
    assert!(contains_array(&[json!("a"), json!(["b", ["c"]])]));
    assert!(!contains_array(&[json!("a"), json!(1)]));
    assert!(!contains_array(&[]));
}

// ============================================================================
// Parsed levels
// ============================================================================

#[test]
fn test_nested_counts_per_level() {
    let expr = parse(r#"["AND", ["a", ["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]], [10, ""]]"#)
        .unwrap();

    assert_eq!(expr.nested_indexes(), vec![1]);
    assert_eq!(nested_field_indexes(&expr.fields), vec![1]);

    // One level down: ["b", ["OR", ["c"], [2]]]
    let child = match &expr.fields[1] {
        restful_sql::Field::Nested(candidate) => candidate.clone(),
        other => panic!("expected nested field, got {:?}", other),
    };
    let scan = find_nested(&child.elements()[1]);
    assert_eq!(scan.count(), 1);
    assert_eq!(scan.indexes, vec![1]);

    // Two levels down: ["c"]
    let grandchild = child.to_expression().unwrap();
    assert_eq!(grandchild.nested_count(), 1);
    let leaf_level = match &grandchild.fields[1] {
        restful_sql::Field::Nested(candidate) => candidate.to_expression().unwrap(),
        other => panic!("expected nested field, got {:?}", other),
    };
    assert_eq!(leaf_level.nested_count(), 0);
    assert!(leaf_level.nested_indexes().is_empty());
}
