/// Default maximum nesting depth accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default maximum source length in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Bounds applied to untrusted input before and during parsing.
///
/// Depth counts nested parentheses, call arguments, chained unary minus and
/// exponents. Exceeding it fails with `ParseError::NestingTooDeep` instead of
/// exhausting the call stack.
///
/// # Example
/// ```
/// use reckon::{config::Limits, error::ParseError, parse_with_limits};
///
/// let limits = Limits { max_depth: 2,
///                       ..Limits::default() };
///
/// assert!(parse_with_limits("(1)", &limits).is_ok());
/// assert!(matches!(parse_with_limits("(((1)))", &limits),
///                  Err(ParseError::NestingTooDeep { limit: 2, .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth.
    pub max_depth:     usize,
    /// Maximum source length in bytes.
    pub max_input_len: usize,
}

impl Limits {
    /// Limits that never reject input.
    ///
    /// Only use this for trusted input: deeply nested sources can overflow
    /// the stack.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth:     usize::MAX,
               max_input_len: usize::MAX, }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth:     DEFAULT_MAX_DEPTH,
               max_input_len: DEFAULT_MAX_INPUT_LEN, }
    }
}
