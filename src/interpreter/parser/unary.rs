use std::iter::Peekable;

use crate::{
    ast::{Expr, PI_NAME},
    error::ParseError,
    interpreter::{
        lexer::{Symbol, Token},
        parser::{
            binary::parse_power,
            core::{Nesting, ParseResult, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Unary minus is
/// right-associative, so `--x` is parsed as `-(-x)`, and it binds looser than
/// `^` on its right: `-2 ^ 2` is `-(2 ^ 2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `nesting`: Current depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Operator(Symbol::Minus), position)) = tokens.peek() {
        let nesting = nesting.deeper(*position)?;
        tokens.next();
        let expr = parse_unary(tokens, nesting)?;
        Ok(Expr::negate(expr))
    } else {
        parse_power(tokens, nesting)
    }
}

/// Parses an atomic expression.
///
/// Atoms form the base of the expression grammar:
/// - numeric literals
/// - the constant `pi`
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | IDENTIFIER "(" arguments? ")"
///           | IDENTIFIER
///           | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
/// - `nesting`: Current depth.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(value), _) => {
            let value = *value;
            tokens.next();
            Ok(Expr::constant(value))
        },
        (Token::LParen, _) => parse_grouping(tokens, nesting),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, nesting),
        (Token::End, position) => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression one level deeper, and then requires a closing `)`. Failure to
/// find it yields `ParseError::ExpectedClosingParen` pointing at the `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, open)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    let expr = parse_expression(tokens, nesting.deeper(*open)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: *open }),
    }
}

/// Parses the constant `pi` or a function call.
///
/// Supported forms:
///
/// - `pi`
/// - `identifier(arg1, arg2, ...)`
///
/// Function names are not checked here; an unknown name or a wrong number of
/// arguments is reported by the evaluator. A bare identifier other than `pi`
/// is rejected, so a parsed tree never references an unknown name.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::NameRef`] for `pi`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is neither `pi` nor followed by `(`,
/// - an argument fails to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, open)) => {
            let open = *open;
            tokens.next();
            let arguments = parse_arguments(tokens, nesting.deeper(open)?, open)?;
            Ok(Expr::Call { name, arguments })
        },
        _ if name == PI_NAME => Ok(Expr::NameRef { name }),
        _ => Err(ParseError::UnknownIdentifier { name, position }),
    }
}
