//! # calctree
//!
//! calctree reads an integer arithmetic expression, builds a
//! precedence-respecting tree out of it, prints that tree and evaluates it.
//!
//! The pipeline runs strictly left to right: text is tokenized, tokens are
//! grouped into a tree, the tree is rendered and finally consumed by the
//! evaluator. Every stage stops at the first [`CompilationError`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, instrument};

pub use crate::error::{CompilationError, CompileResult};
use crate::interpreter::{
    evaluator::core::evaluate,
    lexer::tokenize,
    parser::core::build_tree,
    printer::render,
    value::Value,
};

/// Defines the shape of the expression tree.
///
/// This module declares the `Operator` and `Node` types. Trees are built by
/// the parser, rendered by the printer and consumed by the evaluator.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// # Responsibilities
/// - Defines one error kind per failure mode, from unknown characters to
///   division by zero.
/// - Carries the offending character, position or operator for the message.
pub mod error;
/// Tokenizer, tree builder, printer and evaluator.
///
/// This module ties the stages together and exposes each one separately for
/// callers that want to inspect intermediate results.
pub mod interpreter;
/// General utilities for lossless numeric conversion.
pub mod util;

/// The product of a successful run: the printed tree and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The indented diagram of the tree, one element per line.
    pub tree:  String,
    /// What the expression evaluates to.
    pub value: Value,
}

/// Runs the whole pipeline on one expression.
///
/// The tree is rendered before it is handed to the evaluator, so the diagram
/// is available even though evaluation consumes the tree.
///
/// # Errors
/// Returns the first [`CompilationError`] raised by any stage.
///
/// # Examples
/// ```
/// use calctree::{interpreter::value::Value, run};
///
/// let outcome = run("2 + 3 * 4").unwrap();
/// assert_eq!(outcome.value, Value::Integer(14));
/// assert!(outcome.tree.starts_with("[\n"));
///
/// // A dangling operator has no right operand.
/// assert!(run("5 +").is_err());
/// ```
#[instrument(level = "debug")]
pub fn run(source: &str) -> CompileResult<Outcome> {
    let tokens = tokenize(source)?;
    let tree = build_tree(tokens)?;
    let diagram = render(&tree);
    let value = evaluate(tree)?;

    debug!(%value, "evaluated expression");
    Ok(Outcome { tree: diagram,
                 value })
}

/// Evaluates one expression without rendering its tree.
///
/// # Errors
/// Returns the first [`CompilationError`] raised by any stage.
///
/// # Examples
/// ```
/// use calctree::{error::CompilationError, evaluate_str, interpreter::value::Value};
///
/// assert_eq!(evaluate_str("(2 + 3) * 4"), Ok(Value::Integer(20)));
/// assert_eq!(evaluate_str("1 / 0"), Err(CompilationError::DivisionByZero));
/// ```
pub fn evaluate_str(source: &str) -> CompileResult<Value> {
    evaluate(build_tree(tokenize(source)?)?)
}
