use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, evaluate},
        function::builtin,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length
/// already matches its arity.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// One entry of the builtin table.
pub struct BuiltinDef {
    /// Name used in call position.
    pub name:  &'static str,
    /// Exact number of arguments accepted.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => { arity: 1, func: builtin::sin },
    "cos"  => { arity: 1, func: builtin::cos },
    "tan"  => { arity: 1, func: builtin::tan },
    "log"  => { arity: 1, func: builtin::log },
    "sqrt" => { arity: 1, func: builtin::sqrt },
}

/// Looks up a builtin by name.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("sqrt").map(|b| b.arity), Some(1));
/// assert!(lookup_builtin("exp").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Evaluates a function call.
///
/// Arguments are evaluated left to right first, so an error inside an
/// argument is reported before the callee is resolved. The name is then looked
/// up in the builtin table and the argument count checked against its arity.
///
/// # Parameters
/// - `name`: Function name.
/// - `arguments`: Unevaluated argument expressions.
///
/// # Returns
/// The builtin's result.
///
/// # Errors
/// - `EvalError::UnsupportedFunction` if the name is not a builtin.
/// - `EvalError::ArityMismatch` if the argument count is wrong.
pub fn eval_call(name: &str, arguments: &[Expr]) -> EvalResult<f64> {
    let arg_vals = arguments.iter()
                            .map(evaluate)
                            .collect::<EvalResult<Vec<_>>>()?;

    let builtin = lookup_builtin(name).ok_or_else(|| {
                                          EvalError::UnsupportedFunction { name: name.to_string() }
                                      })?;

    if arg_vals.len() != builtin.arity {
        return Err(EvalError::ArityMismatch { name:     name.to_string(),
                                              expected: builtin.arity,
                                              found:    arg_vals.len(), });
    }

    trace!(name, ?arg_vals, "calling builtin");
    Ok((builtin.func)(&arg_vals))
}
