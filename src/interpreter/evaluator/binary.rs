use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{EvalResult, evaluate},
};

/// Evaluates a binary operation.
///
/// The left operand is evaluated before the right one, and both are always
/// evaluated; no operator short-circuits. The operator semantics live in
/// [`BinaryOperator::apply`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The result of `left op right`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::binary::eval_binary_op,
/// };
///
/// let v = eval_binary_op(BinaryOperator::Sub, &Expr::constant(7.0), &Expr::constant(2.0));
/// assert_eq!(v, Ok(5.0));
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<f64> {
    let left = evaluate(left)?;
    let right = evaluate(right)?;
    Ok(op.apply(left, right))
}
