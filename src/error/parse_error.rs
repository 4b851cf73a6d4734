use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset in the source where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Unexpected character '{found}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending slice of input.
        found:    String,
        /// Byte offset of the slice.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input in the middle of an expression.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the '(' at position {position}.")]
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression at position {position}: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// A bare identifier other than `pi`.
    #[error("Unknown identifier '{name}' at position {position}.")]
    UnknownIdentifier {
        /// The identifier.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// Nesting went deeper than the configured limit.
    #[error("Expression nests deeper than {limit} levels at position {position}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset where the limit was crossed.
        position: usize,
    },
    /// The source is longer than the configured limit.
    #[error("Expression is {length} bytes long; the limit is {limit}.")]
    InputTooLong {
        /// Length of the source in bytes.
        length: usize,
        /// The configured maximum length.
        limit:  usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    ///
    /// `InputTooLong` points at the first byte past the limit.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::UnknownIdentifier { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
            Self::InputTooLong { limit, .. } => *limit,
        }
    }
}
