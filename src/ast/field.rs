use crate::{error::Result, parser, value::Value};

/// One left-hand operand slot of an [`Expression`](crate::ast::Expression).
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Plain column or field name
    ///
    /// # Example
    /// ```text
    /// "a"
    /// ```
    Leaf(String),

    /// Embedded sub-expression, recognized by shape
    ///
    /// # Example
    /// ```text
    /// ["OR", ["c"], [2]]
    /// ```
    Nested(Candidate),
}

impl Field {
    pub fn is_nested(&self) -> bool {
        matches!(self, Field::Nested(_))
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Field::Leaf(name) => Some(name),
            Field::Nested(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Field::Leaf(name) => serde_json::Value::String(name.clone()),
            Field::Nested(candidate) => candidate.to_json(),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::Leaf(name.to_string())
    }
}

/// The raw array held in a nested field slot.
///
/// Only its shape has been checked (an array containing an array). Whether
/// it is a well-formed `[mode, fields, values]` triple is decided when it is
/// flattened, so a malformed candidate fails only once compilation reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    elements: Vec<serde_json::Value>,
}

impl Candidate {
    pub fn new(elements: Vec<serde_json::Value>) -> Self {
        Candidate { elements }
    }

    pub fn elements(&self) -> &[serde_json::Value] {
        &self.elements
    }

    /// Parse the candidate as a standalone expression.
    pub fn to_expression(&self) -> Result<crate::ast::Expression> {
        parser::expression_from_elements(self.elements.clone())
    }

    /// Parse arity and element types only; flattening checks the length
    /// once the candidate's own children are done.
    pub(crate) fn to_unchecked_expression(&self) -> Result<crate::ast::Expression> {
        parser::shape_from_elements(self.elements.clone())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.elements.clone())
    }
}

/// Classify a decoded `fields` element.
///
/// Strings are leaves. Arrays that contain an array become nested
/// candidates. Anything else is kept as a leaf using its textual rendering.
pub(crate) fn classify(element: serde_json::Value) -> Field {
    match element {
        serde_json::Value::String(name) => Field::Leaf(name),
        serde_json::Value::Array(elements) if crate::detect::contains_array(&elements) => {
            Field::Nested(Candidate::new(elements))
        }
        other => Field::Leaf(Value::from_json(other).to_string()),
    }
}
