use std::f64::consts::PI;

use crate::{
    ast::{Expr, PI_NAME},
    error::EvalError,
    interpreter::evaluator::{
        binary::eval_binary_op, function::core::eval_call, unary::eval_unary_op,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree depth-first.
///
/// Every node kind is handled by exactly one arm. The tree is only read, and
/// nothing is kept between calls, so evaluating the same tree twice yields the
/// same result.
///
/// Arithmetic follows IEEE-754: division by zero, `sqrt` or `log` of a
/// negative number and fractional powers of negative numbers produce
/// infinities or NaN rather than errors.
///
/// # Errors
/// - `EvalError::UnsupportedFunction` for a call to a name outside the builtin
///   table.
/// - `EvalError::ArityMismatch` for a builtin called with the wrong number of
///   arguments.
/// - `EvalError::UnknownName` for a name other than `pi`.
///
/// # Example
/// ```
/// use reckon::{ast::Expr, error::EvalError, interpreter::evaluator::core::evaluate};
///
/// let tree = Expr::negate(Expr::constant(2.5));
/// assert_eq!(evaluate(&tree), Ok(-2.5));
///
/// let tree = Expr::NameRef { name: "tau".to_string() };
/// assert_eq!(evaluate(&tree),
///            Err(EvalError::UnknownName { name: "tau".to_string() }));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Constant { value } => Ok(*value),
        Expr::BinaryOp { op, left, right } => eval_binary_op(*op, left, right),
        Expr::UnaryOp { op, expr } => eval_unary_op(*op, expr),
        Expr::Call { name, arguments } => eval_call(name, arguments),
        Expr::NameRef { name } => eval_name(name),
    }
}

/// Resolves a named constant.
///
/// `pi` is the only name the grammar admits. Trees built by hand may carry
/// others, which are rejected.
///
/// # Errors
/// `EvalError::UnknownName` for any name other than `pi`.
pub fn eval_name(name: &str) -> EvalResult<f64> {
    if name == PI_NAME {
        Ok(PI)
    } else {
        Err(EvalError::UnknownName { name: name.to_string() })
    }
}
