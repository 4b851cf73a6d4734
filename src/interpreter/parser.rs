/// Parser entry points and shared parsing state.
///
/// Contains the top-level `parse_tokens` driver, the expression rule that
/// starts the descent, and the depth tracker that bounds recursion.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and power,
/// plus the mapping from lexer symbols to binary operators.
pub mod binary;

/// Unary and atom parsing.
///
/// Handles prefix negation, numeric literals, the `pi` constant, function
/// calls and parenthesized groups.
pub mod unary;

/// Parsing helpers shared by the other parser modules.
pub mod utils;
