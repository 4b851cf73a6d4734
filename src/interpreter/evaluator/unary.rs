use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, evaluate},
};

/// Evaluates a unary operation.
///
/// The only unary operator is `Negate`, which flips the sign of its operand.
/// Negating NaN yields NaN and negating zero yields negative zero.
pub fn eval_unary_op(op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
    let value = evaluate(expr)?;
    Ok(op.apply(value))
}
