//! # calcrs
//!
//! calcrs evaluates arithmetic expressions written as text. It supports
//! decimal numbers, `+ - * /`, exponentiation (`^`), scientific notation
//! (`e`), parentheses, unary signs and a fixed set of named functions
//! (`log ln exp sqrt abs atan acos asin sinh cosh tanh tan sin cos`).
//!
//! The work is split into three stages, each usable on its own:
//! [`tokenize`] turns text into tokens, [`parse`] turns tokens into an
//! [`ast::Expr`], and [`evaluate`] reduces the tree to an `f64`.
//! [`evaluate_text`] runs all three.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and function
/// vocabularies it is built from. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the three node kinds: values, binary and unary operations.
/// - Defines closed enums for every operator and function.
pub mod ast;
/// Provides error types for each pipeline stage.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, or evaluating an expression. Every error carries the offending
/// text and its position so callers can report it verbatim.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Wraps them in a single [`error::Error`] for the full pipeline.
pub mod error;
/// Orchestrates the tokenizer, parser and evaluator.
///
/// This module holds the three pipeline stages. Each stage depends only on
/// the output types of the stage before it.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides the literal conversion used by the parser.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};

/// Tokenizes, parses and evaluates an expression in one call.
///
/// This is `evaluate(parse(tokenize(source)))`. The first failing stage ends
/// the call and its error is returned unchanged, wrapped in [`Error`].
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use calcrs::evaluate_text;
///
/// assert_eq!(evaluate_text("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate_text("2 ^ 3 ^ 2").unwrap(), 64.0);
/// assert_eq!(evaluate_text("- -5").unwrap(), 5.0);
/// assert_eq!(evaluate_text("1 / 0").unwrap(), f64::INFINITY);
///
/// let err = evaluate_text("2 +").unwrap_err();
/// assert_eq!(err.to_string(),
///            "Invalid expression: expected an expression on the right side of + at position 1");
/// ```
pub fn evaluate_text(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    let value = evaluate(&expr)?;

    debug!(source, value, "evaluated expression");
    Ok(value)
}
