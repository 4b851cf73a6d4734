use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Nesting, ParseResult, parse_expression},
    },
};

/// Parses a comma-separated argument list up to and including the closing
/// `)`.
///
/// The opening `(` must already be consumed. An immediately encountered `)`
/// produces an empty list; arity is the evaluator's concern.
///
/// Grammar: `arguments := expression ("," expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `nesting`: Depth at which each argument is parsed.
/// - `open`: Position of the `(` for error reporting.
///
/// # Returns
/// The parsed arguments in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse (including an empty one, as in `f(1,)`),
/// - a token other than `,` or `)` follows an argument,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             nesting: Nesting,
                                                             open: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, nesting)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((Token::End, _)) | None => {
                return Err(ParseError::ExpectedClosingParen { position: open });
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or ')', found {tok}"),
                                                         position: *position, });
            },
        }
    }
    Ok(items)
}
