use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: foreign characters, unexpected tokens, unbalanced parentheses,
/// trailing input and exceeded limits.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types raised while walking a parsed tree: unsupported
/// functions, wrong argument counts and unknown names.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of the parse-then-evaluate pipeline.
///
/// Callers that only display a result collapse every variant into the same
/// `Error` marker; the variants stay available for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed tree did not evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
