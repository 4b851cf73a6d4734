use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Symbol, Token},
        parser::{
            core::{Nesting, ParseResult},
            unary::{parse_atom, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `nesting`: Current depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, nesting)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, nesting)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are parsed at the
/// unary level, so `2 * -3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `nesting`: Current depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, nesting)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, nesting)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// The exponent is parsed at the unary level, which makes `^`
/// right-associative (`a ^ b ^ c` parses as `a ^ (b ^ c)`) and allows a
/// negative exponent (`2 ^ -1`). The base is always an atom, so `-2 ^ 2` is
/// `-(2 ^ 2)`.
///
/// The rule is: `power := atom ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `nesting`: Current depth.
///
/// # Returns
/// An exponentiation expression tree, or the bare atom.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_atom(tokens, nesting)?;
    if let Some((Token::Operator(Symbol::Caret), position)) = tokens.peek() {
        let nesting = nesting.deeper(*position)?;
        tokens.next();
        let exponent = parse_unary(tokens, nesting)?;
        return Ok(Expr::binary(BinaryOperator::Pow, base, exponent));
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+`, `-`, `*`,
/// `/` or `^`, and `None` for all other tokens. Whether `-` is used as a
/// binary or a unary operator is decided by the grammar rule that sees it.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Symbol, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(Symbol::Plus)),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(Symbol::Plus) => Some(BinaryOperator::Add),
        Token::Operator(Symbol::Minus) => Some(BinaryOperator::Sub),
        Token::Operator(Symbol::Star) => Some(BinaryOperator::Mul),
        Token::Operator(Symbol::Slash) => Some(BinaryOperator::Div),
        Token::Operator(Symbol::Caret) => Some(BinaryOperator::Pow),
        _ => None,
    }
}
