// tests/output_tests.rs

use restful_sql::output::{build, build_clauses};
use restful_sql::{FlatExpression, Value};
use serde_json::json;

fn names(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

// ============================================================================
// Clause rendering
// ============================================================================

#[test]
fn test_single_number() {
    assert_eq!(build_clauses("AND", &names(&["a"]), &[Value::Number(2.0)]), "(a = 2)");
}

#[test]
fn test_number_and_string() {
    let sql = build_clauses(
        "AND",
        &names(&["a", "b"]),
        &[Value::Number(2.0), Value::from("2")],
    );
    assert_eq!(sql, "(a = 2) AND (b = '2')");
}

#[test]
fn test_fractional_number() {
    assert_eq!(
        build_clauses("AND", &names(&["price"]), &[Value::Number(2.5)]),
        "(price = 2.5)"
    );
}

#[test]
fn test_number_magnitudes_print_without_exponent() {
    let fields = names(&["big", "small", "huge"]);
    let values = [Value::Number(1e6), Value::Number(0.00001), Value::Number(1e21)];
    assert_eq!(
        build_clauses("AND", &fields, &values),
        "(big = 1000000) AND (small = 0.00001) AND (huge = 1000000000000000000000)"
    );
}

#[test]
fn test_negative_zero() {
    assert_eq!(build_clauses("AND", &names(&["a"]), &[Value::Number(-0.0)]), "(a = -0)");
}

#[test]
fn test_empty_string_renders_bare_field() {
    assert_eq!(build_clauses("AND", &names(&["is_active"]), &[Value::from("")]), "(is_active)");
}

#[test]
fn test_string_is_not_escaped() {
    assert_eq!(
        build_clauses("AND", &names(&["name"]), &[Value::from("O'Brien")]),
        "(name = 'O'Brien')"
    );
}

#[test]
fn test_boolean_and_null() {
    let sql = build_clauses(
        "OR",
        &names(&["active", "deleted_at"]),
        &[Value::Boolean(true), Value::Null],
    );
    assert_eq!(sql, "(active = true) OR (deleted_at = NULL)");
}

#[test]
fn test_composite_value_renders_as_json() {
    let sql = build_clauses("AND", &names(&["ids"]), &[Value::Composite(json!([1, 2]))]);
    assert_eq!(sql, "(ids = [1,2])");
}

// ============================================================================
// Joining
// ============================================================================

#[test]
fn test_mode_used_verbatim() {
    let sql = build_clauses(
        "and also",
        &names(&["a", "b"]),
        &[Value::Number(1.0), Value::Number(2.0)],
    );
    assert_eq!(sql, "(a = 1) and also (b = 2)");
}

#[test]
fn test_empty_level() {
    assert_eq!(build_clauses("AND", &[], &[]), "");
}

#[test]
fn test_build_flat_expression() {
    let flat = FlatExpression {
        mode: "AND".into(),
        fields: names(&["b", "(c = 2)"]),
        values: vec![Value::Number(2.0), Value::from("")],
    };
    assert_eq!(build(&flat), "(b = 2) AND ((c = 2))");
}
