//! Error types for parsing and compiling RSQL queries.

use thiserror::Error;

/// Errors that can occur while parsing or compiling a query.
///
/// Every failure rejects the whole query; no partial output accompanies an error.
#[derive(Error, Debug)]
pub enum RsqlError {
    /// The input bytes are not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// A level is not a `[mode, fields, values]` triple
    #[error("invalid restful sql: {0}")]
    InvalidStructure(String),

    /// `fields` and `values` differ in length at some level
    #[error("number of fields and values mismatched: {fields} fields, {values} values")]
    LengthMismatch { fields: usize, values: usize },

    /// Nested expressions go deeper than the configured limit
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl RsqlError {
    pub(crate) fn structure(reason: impl Into<String>) -> Self {
        RsqlError::InvalidStructure(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, RsqlError>;
