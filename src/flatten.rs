//! Flattening of nested expressions.
//!
//! Flattening walks the tree depth-first and replaces every nested field
//! with the compiled string of its sub-expression. Children are compiled
//! before their parents, so the string builder only ever sees scalars.

use crate::{
    ast::{Expression, Field, FlatExpression},
    config::CompileOptions,
    error::{Result, RsqlError},
    output,
};

/// Collapse every nested field of `expr` into a string fragment.
///
/// Any structural or length error in a nested candidate aborts the whole
/// call. A level's own length is checked after its children, so the
/// deepest failure is the one reported. Values are carried over unchanged,
/// including the empty-string placeholders paired with nested fields.
///
/// # Examples
///
/// ```
/// use restful_sql::{flatten::flatten, parse, CompileOptions};
///
/// let expr = parse(r#"["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]"#).unwrap();
/// let flat = flatten(&expr, &CompileOptions::default()).unwrap();
/// assert_eq!(flat.fields, vec!["b".to_string(), "(c = 2)".to_string()]);
/// ```
pub fn flatten(expr: &Expression, options: &CompileOptions) -> Result<FlatExpression> {
    flatten_at(expr, 1, options)
}

fn flatten_at(expr: &Expression, depth: usize, options: &CompileOptions) -> Result<FlatExpression> {
    if depth > options.max_depth {
        return Err(RsqlError::DepthExceeded {
            limit: options.max_depth,
        });
    }

    let mut fields = Vec::with_capacity(expr.fields.len());
    for (index, field) in expr.fields.iter().enumerate() {
        match field {
            Field::Leaf(name) => fields.push(name.clone()),
            Field::Nested(candidate) => {
                let child = candidate.to_unchecked_expression()?;
                let flat = flatten_at(&child, depth + 1, options)?;
                let fragment = output::build(&flat);
                tracing::trace!(depth, index, fragment = %fragment, "Flattened nested expression");
                fields.push(fragment);
            }
        }
    }
    expr.check_length()?;

    Ok(FlatExpression {
        mode: expr.mode.clone(),
        fields,
        values: expr.values.clone(),
    })
}
