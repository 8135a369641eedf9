use std::fmt;

/// A right-hand operand of an RSQL clause.
///
/// Values are classified once, when the JSON input is decoded, so the
/// string builder can decide on quoting by matching on the variant.
///
/// # Numbers
///
/// JSON numbers are held as `f64`, matching what a generic JSON decoder
/// produces. Whole numbers render without a fractional part (`10.0` → `10`).
///
/// # Examples
///
/// ```
/// use restful_sql::Value;
///
/// assert_eq!(Value::Number(10.0).to_string(), "10");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Null.to_string(), "NULL");
/// assert!(Value::String(String::new()).is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// JSON number
    Number(f64),

    /// UTF-8 string; the empty string marks a nested-expression slot
    String(String),

    /// Array or object found where a scalar was expected, kept verbatim
    Composite(serde_json::Value),
}

impl Value {
    /// Classify a decoded JSON value.
    pub fn from_json(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Composite(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Composite(other),
        }
    }

    /// Convert back to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Composite(v) => v.clone(),
        }
    }

    /// True for the empty string, which stands in for the value of a
    /// nested expression and renders as a bare `(field)` clause.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Composite(serde_json::Value::Array(_)) => "array",
            Value::Composite(serde_json::Value::Object(_)) => "object",
            Value::Composite(_) => "number",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Composite(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
