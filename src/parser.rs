use crate::{
    ast::{Expression, field},
    config::{CompileOptions, MAX_DECODE_DEPTH},
    error::{Result, RsqlError},
    value::Value,
};

/// Parse a query from JSON text.
///
/// # Examples
///
/// ```
/// use restful_sql::parser::parse;
///
/// let expr = parse(r#"["AND", ["a", "b"], [2, "2"]]"#).unwrap();
/// assert_eq!(expr.mode, "AND");
/// assert_eq!(expr.fields.len(), 2);
/// ```
pub fn parse(input: &str) -> Result<Expression> {
    parse_value(serde_json::from_str(input).map_err(decode_error)?)
}

/// Parse a query from raw JSON bytes
pub fn parse_slice(input: &[u8]) -> Result<Expression> {
    parse_value(serde_json::from_slice(input).map_err(decode_error)?)
}

/// The decoder refuses arrays nested past its recursion limit. That input
/// is valid JSON, just too deep, so it is reported as such.
fn decode_error(e: serde_json::Error) -> RsqlError {
    if e.to_string().starts_with("recursion limit exceeded") {
        tracing::debug!(error = %e, "Query nesting exceeds decoder limit");
        return RsqlError::DepthExceeded {
            limit: MAX_DECODE_DEPTH,
        };
    }
    RsqlError::MalformedJson(e)
}

/// Parse a query from an already decoded JSON value
pub fn parse_value(root: serde_json::Value) -> Result<Expression> {
    let elements = match root {
        serde_json::Value::Array(elements) => elements,
        other => {
            return Err(RsqlError::structure(format!(
                "expected a [mode, fields, values] array, got {}",
                Value::from_json(other).type_name()
            )));
        }
    };

    let expr = expression_from_elements(elements)?;
    tracing::debug!(
        mode = %expr.mode,
        fields = expr.fields.len(),
        nested = expr.nested_count(),
        "Parsed query"
    );
    Ok(expr)
}

/// Build one level from the elements of a `[mode, fields, values]` array.
///
/// Nested field entries are classified but not parsed; see
/// [`Candidate`](crate::ast::Candidate).
pub(crate) fn expression_from_elements(elements: Vec<serde_json::Value>) -> Result<Expression> {
    let expr = shape_from_elements(elements)?;
    expr.check_length()?;
    Ok(expr)
}

/// Like [`expression_from_elements`] but checks only arity and element
/// types. The caller is responsible for the length check.
pub(crate) fn shape_from_elements(elements: Vec<serde_json::Value>) -> Result<Expression> {
    let [mode, fields, values]: [serde_json::Value; 3] =
        elements.try_into().map_err(|rest: Vec<serde_json::Value>| {
            RsqlError::structure(format!("expected 3 elements, got {}", rest.len()))
        })?;

    let mode = match mode {
        serde_json::Value::String(s) => s,
        other => {
            return Err(RsqlError::structure(format!(
                "mode must be a string, got {}",
                Value::from_json(other).type_name()
            )));
        }
    };

    let fields = expect_array("fields", fields)?;
    let values = expect_array("values", values)?;

    Ok(Expression {
        mode,
        fields: fields.into_iter().map(field::classify).collect(),
        values: values.into_iter().map(Value::from_json).collect(),
    })
}

fn expect_array(name: &str, v: serde_json::Value) -> Result<Vec<serde_json::Value>> {
    match v {
        serde_json::Value::Array(elements) => Ok(elements),
        other => Err(RsqlError::structure(format!(
            "{} must be an array, got {}",
            name,
            Value::from_json(other).type_name()
        ))),
    }
}

/// A query handle that parses once and compiles on demand.
///
/// ```
/// use restful_sql::Parser;
///
/// let mut parser = Parser::new(r#"["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]"#);
/// parser.parse().unwrap();
/// assert_eq!(parser.compile().unwrap(), "(b = 2) AND ((c = 2))");
/// ```
pub struct Parser {
    raw_query: String,
    query: Option<Expression>,
    options: CompileOptions,
}

impl Parser {
    pub fn new(query: impl Into<String>) -> Self {
        Parser {
            raw_query: query.into(),
            query: None,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The parsed tree, if [`parse`](Self::parse) has succeeded
    pub fn query(&self) -> Option<&Expression> {
        self.query.as_ref()
    }

    /// Decode and validate the query text.
    pub fn parse(&mut self) -> Result<&Expression> {
        let expr = parse(&self.raw_query)?;
        let expr = self.query.insert(expr);
        Ok(&*expr)
    }

    /// Compile the query, parsing it first if that has not happened yet.
    pub fn compile(&mut self) -> Result<String> {
        let expr = match self.query.take() {
            Some(expr) => expr,
            None => parse(&self.raw_query)?,
        };
        let result = crate::compile_with(&expr, &self.options);
        self.query = Some(expr);
        result
    }
}
