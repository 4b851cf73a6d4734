/// Unary real builtins.
///
/// Thin wrappers over the `f64` methods backing `sin`, `cos`, `tan`, `log`
/// and `sqrt`.
pub mod builtin;

/// Builtin table and call evaluation.
///
/// Declares the static name-to-function table, checks arity and dispatches.
pub mod core;
