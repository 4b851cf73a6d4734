use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    config::Limits,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tracks how deep the descent currently is.
///
/// Every rule that recurses back into a higher-level rule (groups, call
/// arguments, prefix minus, exponents) asks for a [`Nesting::deeper`] level
/// first, which fails once the configured limit is crossed.
#[derive(Debug, Clone, Copy)]
pub struct Nesting {
    depth: usize,
    limit: usize,
}

impl Nesting {
    /// Starts at depth zero with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    /// Descends one level.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` when the new depth exceeds the limit.
    pub fn deeper(self, position: usize) -> ParseResult<Self> {
        let depth = self.depth.saturating_add(1);
        if depth > self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    position });
        }
        Ok(Self { depth,
                  limit: self.limit })
    }
}

/// Parses a complete token stream into a single expression.
///
/// The stream must be the output of
/// [`tokenize`](crate::interpreter::lexer::tokenize), terminated by
/// [`Token::End`]. Anything left before `End` once the expression is complete
/// is reported as trailing input.
///
/// # Errors
/// Any `ParseError` raised by the grammar rules, or
/// `UnexpectedTrailingTokens` for leftover input.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr},
///     config::Limits,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let expr = parse_tokens(&tokens, &Limits::default()).unwrap();
///
/// assert_eq!(expr,
///            Expr::binary(BinaryOperator::Add, Expr::constant(1.0), Expr::constant(2.0)));
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)], limits: &Limits) -> ParseResult<Expr> {
    trace!(count = tokens.len(), "parsing token stream");

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, Nesting::new(limits.max_depth))?;

    match iter.next() {
        Some((Token::End, _)) | None => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                            position: *position, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point of the descent. It begins at the lowest-precedence
/// level, addition and subtraction.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `nesting`: Current depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, nesting)
}
