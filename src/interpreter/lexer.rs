use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens; function names such as `sqrt` or the constant `pi`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`, `-`, `*`, `/` or `^`.
    #[token("+", |_| Symbol::Plus)]
    #[token("-", |_| Symbol::Minus)]
    #[token("*", |_| Symbol::Star)]
    #[token("/", |_| Symbol::Slash)]
    #[token("^", |_| Symbol::Caret)]
    Operator(Symbol),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by the lexer itself;
    /// [`tokenize`] appends exactly one.
    End,
}

/// The operator symbols recognized by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
}

impl Symbol {
    /// Returns the source text of the symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(symbol) => write!(f, "{}", symbol.as_str()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => write!(f, "whitespace"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Splits the source into tokens, each paired with its byte offset.
///
/// The returned vector always ends with a single [`Token::End`] positioned at
/// `source.len()`.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for the first slice of input that
/// is not a number, identifier, operator, comma or parenthesis.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Symbol, Token, tokenize};
///
/// let tokens = tokenize("2 * pi").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Operator(Symbol::Star), 2),
///                 (Token::Identifier("pi".to_string()), 4),
///                 (Token::End, 6)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                             position });
            },
        }
    }

    tokens.push((Token::End, source.len()));
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals beyond the `f64` range become
///   infinity, as with any IEEE-754 parse.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
