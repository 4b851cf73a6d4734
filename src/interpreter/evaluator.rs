/// Binary operator evaluation logic.
///
/// Evaluates both operands, left first, and applies the arithmetic operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk that dispatches on every node kind, and the
/// resolution of named constants.
pub mod core;

/// Function evaluation.
///
/// Holds the static builtin table, arity checking and the builtin
/// implementations.
pub mod function;
