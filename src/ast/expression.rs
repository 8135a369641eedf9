use std::str::FromStr;

use crate::{
    ast::Field,
    detect,
    error::{Result, RsqlError},
    value::Value,
};

/// One level of a query tree: `[mode, fields, values]`.
///
/// `fields` and `values` always have the same length; the parser refuses
/// anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Combinator joining the clauses of this level
    pub mode: String,
    /// Left-hand operands
    pub fields: Vec<Field>,
    /// Right-hand operands, paired with `fields` by position
    pub values: Vec<Value>,
}

impl Expression {
    /// Build an expression, enforcing the length invariant.
    pub fn new(mode: impl Into<String>, fields: Vec<Field>, values: Vec<Value>) -> Result<Self> {
        let expr = Expression {
            mode: mode.into(),
            fields,
            values,
        };
        expr.check_length()?;
        Ok(expr)
    }

    pub(crate) fn check_length(&self) -> Result<()> {
        if self.fields.len() != self.values.len() {
            return Err(RsqlError::LengthMismatch {
                fields: self.fields.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Positions of nested fields, in ascending order
    pub fn nested_indexes(&self) -> Vec<usize> {
        detect::nested_field_indexes(&self.fields)
    }

    pub fn nested_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_nested()).count()
    }

    /// JSON view of the tree, with nested candidates shown as raw arrays
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": self.mode,
            "fields": self.fields.iter().map(Field::to_json).collect::<Vec<_>>(),
            "values": self.values.iter().map(Value::to_json).collect::<Vec<_>>(),
            "nested": self.nested_indexes(),
        })
    }
}

impl FromStr for Expression {
    type Err = RsqlError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}

/// A level whose nested fields have all been compiled into string fragments.
///
/// This is the output of [`flatten`](crate::flatten::flatten) and the input
/// of the string builder.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatExpression {
    pub mode: String,
    pub fields: Vec<String>,
    pub values: Vec<Value>,
}
