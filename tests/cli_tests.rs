// tests/cli_tests.rs

#![cfg(feature = "cli")]

use restful_sql::cli::{CheckMode, CheckOptions, CheckResult, CliError, execute_check, render_json};
use restful_sql::{CompileOptions, RsqlError};
use serde_json::json;

fn options(query: &str, mode: CheckMode) -> CheckOptions {
    CheckOptions {
        query: Some(query.to_string()),
        mode,
        compile: CompileOptions::default(),
    }
}

// ============================================================================
// Check modes
// ============================================================================

#[test]
fn test_compile_mode() {
    let result = execute_check(&options(r#"["AND", ["a", "b"], [2, "2"]]"#, CheckMode::Compile));
    assert_eq!(result.unwrap(), CheckResult::Compiled("(a = 2) AND (b = '2')".into()));
}

#[test]
fn test_validate_mode() {
    let result = execute_check(&options(
        r#"["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]"#,
        CheckMode::Validate,
    ));
    assert_eq!(result.unwrap(), CheckResult::Valid);
}

#[test]
fn test_validate_mode_reaches_nested_levels() {
    let result = execute_check(&options(
        r#"["AND", ["b", ["OR", ["c", "d"], [2]]], [2, ""]]"#,
        CheckMode::Validate,
    ));
    assert!(matches!(
        result,
        Err(CliError::Query(RsqlError::LengthMismatch { .. }))
    ));
}

#[test]
fn test_tree_mode() {
    let result = execute_check(&options(
        r#"["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]"#,
        CheckMode::Tree,
    ))
    .unwrap();

    assert_eq!(
        result,
        CheckResult::Tree(json!({
            "mode": "AND",
            "fields": ["b", ["OR", ["c"], [2]]],
            "values": [2.0, ""],
            "nested": [1]
        }))
    );
}

// ============================================================================
// Errors and output
// ============================================================================

#[test]
fn test_missing_query() {
    let opts = CheckOptions::default();
    assert!(matches!(execute_check(&opts), Err(CliError::NoInput)));

    let blank = options("   \n", CheckMode::Compile);
    assert!(matches!(execute_check(&blank), Err(CliError::NoInput)));
}

#[test]
fn test_error_message() {
    let err = execute_check(&options(r#"["AND", ["a"]]"#, CheckMode::Compile)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid query: invalid restful sql: expected 3 elements, got 2"
    );
}

#[test]
fn test_render_json() {
    let value = json!({"mode": "AND"});
    assert_eq!(render_json(&value, false).unwrap(), r#"{"mode":"AND"}"#);
    assert_eq!(render_json(&value, true).unwrap(), "{\n  \"mode\": \"AND\"\n}");
}
