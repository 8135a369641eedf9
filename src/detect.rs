//! Nested-expression detection.
//!
//! A `fields` entry is an embedded expression when it is an array that
//! contains at least one array. The check is purely structural: a flagged
//! entry is not validated as a `[mode, fields, values]` triple here.

use crate::ast::Field;

/// Result of scanning a `fields` array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedScan {
    /// Positions of nested entries, in the order they were found
    pub indexes: Vec<usize>,
}

impl NestedScan {
    pub fn count(&self) -> usize {
        self.indexes.len()
    }

    /// No nested entries means there is nothing left to flatten
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

/// True if any element is itself an array
pub fn contains_array(elements: &[serde_json::Value]) -> bool {
    elements.iter().any(serde_json::Value::is_array)
}

/// True if `entry` is shaped like an embedded expression
pub fn is_nested(entry: &serde_json::Value) -> bool {
    entry.as_array().is_some_and(|inner| contains_array(inner))
}

/// Scan a raw `fields` array for embedded expressions.
///
/// Anything other than an array has no entries and scans as empty.
///
/// # Examples
///
/// ```
/// use restful_sql::detect::find_nested;
/// use serde_json::json;
///
/// let scan = find_nested(&json!(["b", ["OR", ["c"], [2]]]));
/// assert_eq!(scan.count(), 1);
/// assert_eq!(scan.indexes, vec![1]);
///
/// assert!(find_nested(&json!(["a", "b"])).is_empty());
/// ```
pub fn find_nested(fields: &serde_json::Value) -> NestedScan {
    let indexes = match fields.as_array() {
        Some(entries) => entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| is_nested(entry))
            .map(|(i, _)| i)
            .collect(),
        None => Vec::new(),
    };
    NestedScan { indexes }
}

/// Positions of already-classified nested fields
pub fn nested_field_indexes(fields: &[Field]) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_nested())
        .map(|(i, _)| i)
        .collect()
}
