//! SQL expression output for flattened RSQL levels.
//!
//! Each `field`/`value` pair becomes one parenthesized clause:
//!
//! - empty string value → `(field)`
//! - other string value → `(field = 'value')` (quoted, not escaped)
//! - anything else → `(field = value)`
//!
//! Clauses are joined with ` MODE `. A level with a single field is not
//! unwrapped, so a one-clause nested expression renders as `((c = 2))`.
//!
//! # Examples
//!
//! ```
//! use restful_sql::output::build_clauses;
//! use restful_sql::Value;
//!
//! let fields = vec!["a".to_string(), "b".to_string()];
//! let values = vec![Value::Number(2.0), Value::from("2")];
//! assert_eq!(build_clauses("AND", &fields, &values), "(a = 2) AND (b = '2')");
//! ```

use crate::{ast::FlatExpression, value::Value};

/// Render a flattened level as a boolean expression
pub fn build(expr: &FlatExpression) -> String {
    build_clauses(&expr.mode, &expr.fields, &expr.values)
}

/// Render paired fields and values joined by `mode`.
///
/// Pairs past the shorter of the two slices are ignored.
pub fn build_clauses(mode: &str, fields: &[String], values: &[Value]) -> String {
    let clauses: Vec<String> = fields
        .iter()
        .zip(values)
        .map(|(field, value)| clause(field, value))
        .collect();
    clauses.join(&format!(" {} ", mode))
}

fn clause(field: &str, value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => format!("({})", field),
        Value::String(s) => format!("({} = '{}')", field, s),
        other => format!("({} = {})", field, other),
    }
}
