use thiserror::Error;

/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Domain problems such as `sqrt(-1)` or division by zero are not errors; they
/// follow IEEE-754 and produce NaN or an infinity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Called a function that is not in the builtin table.
    #[error("Unsupported function '{name}'.")]
    UnsupportedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    #[error("Function '{name}' takes {expected} argument(s) but {found} were supplied.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The arity the builtin declares.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
    },
    /// Referenced a name other than `pi`.
    #[error("Unknown name '{name}'.")]
    UnknownName {
        /// The name that was referenced.
        name: String,
    },
}
