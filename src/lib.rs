//! # reckon
//!
//! reckon is a restricted arithmetic expression evaluator written in Rust.
//! It accepts numbers, `+ - * / ^`, unary minus, parentheses, the functions
//! `sin`, `cos`, `tan`, `log` (base 10) and `sqrt`, and the constant `pi`.
//! Anything outside that grammar is rejected; nothing is ever executed.

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

use tracing::trace;

use crate::{
    ast::Expr,
    config::Limits,
    error::{CalcError, ParseError},
    interpreter::{lexer::tokenize, parser::core::parse_tokens},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree, together with the operator table: symbols,
/// precedence, associativity and arithmetic semantics.
///
/// # Responsibilities
/// - Defines the closed set of node kinds.
/// - Describes how each operator binds and what it computes.
/// - Renders trees back to canonical source text.
pub mod ast;
/// Calculator sessions built on top of the evaluator.
///
/// Collapses every failure into a single `Error` outcome for display and keeps
/// a history of successful evaluations that can be recalled.
pub mod calculator;
/// Bounds applied to untrusted input.
///
/// Provides `Limits`, the maximum source length and nesting depth accepted by
/// the parser.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, each with structured details such as the
/// source position or the offending name.
///
/// # Responsibilities
/// - Defines one error enum per stage plus `CalcError` wrapping both.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, the recursive-descent parser and the
/// tree-walking evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages.
/// - Exposes each stage for callers that need only part of the pipeline.
pub mod interpreter;
/// General utilities.
///
/// Currently the formatting of results for display.
pub mod util;

pub use interpreter::evaluator::core::evaluate;

/// Parses an expression with the default [`Limits`].
///
/// # Errors
/// Returns a `ParseError` for malformed input, see [`parse_with_limits`].
///
/// # Examples
/// ```
/// use reckon::{ast::Expr, parse};
///
/// let expr = parse("-pi").unwrap();
/// assert_eq!(expr, Expr::negate(Expr::NameRef { name: "pi".to_string() }));
///
/// assert!(parse("2++3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_limits(source, &Limits::default())
}

/// Parses an expression, rejecting input that exceeds `limits`.
///
/// # Errors
/// Returns a `ParseError` if the source is too long, contains a character
/// outside the grammar, is malformed, nests too deeply, or names an
/// identifier other than `pi` outside call position.
pub fn parse_with_limits(source: &str, limits: &Limits) -> Result<Expr, ParseError> {
    if source.len() > limits.max_input_len {
        return Err(ParseError::InputTooLong { length: source.len(),
                                              limit:  limits.max_input_len, });
    }

    trace!(source, "parsing expression");
    let tokens = tokenize(source)?;
    let expr = parse_tokens(&tokens, limits)?;
    trace!(depth = expr.depth(), "parsed expression");
    Ok(expr)
}

/// Parses and evaluates an expression with the default [`Limits`].
///
/// The result follows IEEE-754: `1/0` is infinity and `sqrt(-1)` is NaN.
/// Callers that display results decide how to show those; see
/// [`calculator::Calculator`].
///
/// # Errors
/// Returns `CalcError::Parse` or `CalcError::Eval` with the specific cause.
///
/// # Examples
/// ```
/// use reckon::{calculate, error::{CalcError, EvalError}};
///
/// assert_eq!(calculate("2^3^2"), Ok(512.0));
/// assert_eq!(calculate("-2^2"), Ok(-4.0));
///
/// assert!(matches!(calculate("foo(1)"),
///                  Err(CalcError::Eval(EvalError::UnsupportedFunction { .. }))));
/// assert!(matches!(calculate("(2+3"), Err(CalcError::Parse(_))));
/// ```
pub fn calculate(source: &str) -> Result<f64, CalcError> {
    calculate_with_limits(source, &Limits::default())
}

/// Parses and evaluates an expression, rejecting input that exceeds `limits`.
///
/// # Errors
/// Returns `CalcError::Parse` or `CalcError::Eval` with the specific cause.
pub fn calculate_with_limits(source: &str, limits: &Limits) -> Result<f64, CalcError> {
    let expr = parse_with_limits(source, limits)?;
    Ok(evaluate(&expr)?)
}
