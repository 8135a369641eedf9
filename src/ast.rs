//! # RSQL - Expression Tree
//!
//! This module defines the typed tree a query decodes into.
//!
//! ## Notation
//!
//! Every level of a query is a 3-element JSON array:
//!
//! ```text
//! [mode, fields, values]
//! ```
//!
//! - **mode** - combinator token joining sibling clauses, used verbatim (`"AND"`, `"OR"`, ...)
//! - **fields** - left-hand operands; a plain name or an embedded `[mode, fields, values]`
//! - **values** - right-hand operands, paired with `fields` by position
//!
//! ## Nested Expressions
//!
//! A field slot holds an embedded expression when it is an array that itself
//! contains an array. Its paired value is the empty string by convention:
//!
//! ```text
//! ["AND", ["b", ["OR", ["c"], [2]]], [2, ""]]
//! ```
//!
//! compiles to `(b = 2) AND ((c = 2))`.
//!
//! ## Submodules
//!
//! - **[expression]** - [`Expression`] and its flattened form [`FlatExpression`]
//! - **[field]** - [`Field`] slots and the raw nested [`Candidate`]
pub mod expression;
pub mod field;

pub use expression::{Expression, FlatExpression};
pub use field::{Candidate, Field};
