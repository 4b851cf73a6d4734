/// Defines a unary builtin backed by an `f64` method.
///
/// The generated functions read the first argument; the builtin table checks
/// arity before dispatching, so a direct call with an empty slice yields NaN
/// rather than panicking.
///
/// Domain errors are not reported: the underlying method's IEEE-754 result
/// (NaN or an infinity) is returned as-is.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::{log, sin, sqrt};
///
/// assert_eq!(sin(&[0.0]), 0.0);
/// assert_eq!(log(&[1000.0]), 3.0);
/// assert!(sqrt(&[-1.0]).is_nan());
/// assert!(sqrt(&[]).is_nan());
/// ```
macro_rules! real_builtin {
    ($(#[$meta:meta])* $fname:ident, $real_fn:ident) => {
        $(#[$meta])*
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            args.first().copied().map_or(f64::NAN, f64::$real_fn)
        }
    };
}

real_builtin!(
    /// Sine of an angle in radians.
    sin, sin
);
real_builtin!(
    /// Cosine of an angle in radians.
    cos, cos
);
real_builtin!(
    /// Tangent of an angle in radians.
    tan, tan
);
real_builtin!(
    /// Base-10 logarithm. `log(0)` is negative infinity and a negative
    /// argument yields NaN.
    log, log10
);
real_builtin!(
    /// Square root. A negative argument yields NaN.
    sqrt, sqrt
);
