//! Compile JSON-encoded `[mode, fields, values]` filter tuples into SQL
//! boolean expressions.
//!
//! ```
//! let sql = restful_sql::parse_and_compile(
//!     r#"["AND", ["a", ["AND", ["b", ["OR", ["c", "d"], [2, 3]]], [2, ""]]], [10, ""]]"#,
//! )
//! .unwrap();
//! assert_eq!(sql, "(a = 10) AND ((b = 2) AND ((c = 2) OR (d = 3)))");
//! ```
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod flatten;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Candidate, Expression, Field, FlatExpression};
pub use config::CompileOptions;
pub use error::{Result, RsqlError};
pub use parser::{Parser, parse, parse_slice, parse_value};
pub use value::Value;

/// Compile a parsed query with default options.
pub fn compile(expr: &Expression) -> Result<String> {
    compile_with(expr, &CompileOptions::default())
}

/// Flatten nested expressions, then join the top level.
pub fn compile_with(expr: &Expression, options: &CompileOptions) -> Result<String> {
    let flat = flatten::flatten(expr, options)?;
    let sql = output::build(&flat);
    tracing::debug!(sql = %sql, "Compiled query");
    Ok(sql)
}

/// Parse and compile in one step
pub fn parse_and_compile(input: &str) -> Result<String> {
    compile(&parse(input)?)
}
