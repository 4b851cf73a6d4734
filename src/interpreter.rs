/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator traverses the AST depth-first, applies the arithmetic
/// operators and dispatches calls through the static builtin table. It holds
/// no state between calls.
///
/// # Responsibilities
/// - Evaluates every AST node kind with one exhaustive match.
/// - Resolves builtin functions and checks their arity.
/// - Reports unsupported functions and unknown names.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces a stream of tokens, each paired
/// with its byte offset: numbers, identifiers, operators, parentheses and
/// commas. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with their source positions.
/// - Skips whitespace.
/// - Rejects any character outside the grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with one
/// recursive-descent function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Enforces precedence and associativity.
/// - Reports malformed input with its position and bounds recursion depth.
pub mod parser;
