//! Run queries through the parser and compiler

use super::CliError;
use crate::{CompileOptions, compile_with, parse};

/// What a CLI invocation should produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Compile and return the SQL expression
    #[default]
    Compile,
    /// Validate fully but return nothing
    Validate,
    /// Return the parsed tree as JSON
    Tree,
}

/// Options for a check run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The RSQL query text
    pub query: Option<String>,
    pub mode: CheckMode,
    pub compile: CompileOptions,
}

/// Result of a check run
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Query compiled to this expression
    Compiled(String),
    /// Query parsed and compiled without error
    Valid,
    /// Parsed tree
    Tree(serde_json::Value),
}

/// Execute a check run
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = options.query.as_deref().ok_or(CliError::NoInput)?;
    if query.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    let expr = parse(query)?;

    match options.mode {
        CheckMode::Tree => Ok(CheckResult::Tree(expr.to_json())),
        CheckMode::Validate => {
            compile_with(&expr, &options.compile)?;
            Ok(CheckResult::Valid)
        }
        CheckMode::Compile => Ok(CheckResult::Compiled(compile_with(&expr, &options.compile)?)),
    }
}
