//! CLI support for restful-sql
//!
//! Provides programmatic access to the `rsql` commands so other tools can
//! embed them without spawning the binary.

mod check;
mod convert;

pub use check::{CheckMode, CheckOptions, CheckResult, execute_check};
pub use convert::render_json;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Query rejected by the parser or compiler
    #[error("Invalid query: {0}")]
    Query(#[from] crate::RsqlError),

    /// JSON output could not be produced
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query provided
    #[error("No query provided. Pass it as an argument, use --input-file, or pipe it to stdin.")]
    NoInput,
}
