//! Lexical error types.
//!
//! Errors never stop the scan. The lexer records each one, emits an
//! [`Invalid`](crate::TokenKind::Invalid) token in its place and carries on;
//! the caller decides what an accumulated list means.

/// Why a token could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexErrorKind {
    /// Integer literal that does not parse as an unsigned 64-bit value.
    #[error("invalid integer literal: {0}")]
    InvalidInteger(String),

    /// Float literal that does not parse or is out of range.
    #[error("invalid float literal: {0}")]
    InvalidFloat(String),

    /// Bit literal with a bad digit or too many digits.
    #[error("invalid bit literal: {0}")]
    InvalidBit(String),

    /// Quoted string without its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Backtick identifier without its closing backtick.
    #[error("unterminated quoted identifier")]
    UnterminatedIdentifier,

    /// `/*` without a matching `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// `@@` not followed by a variable name.
    #[error("missing system variable name")]
    MissingVariableName,
}

/// A lexical error with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("line {line} column {column} near \"{near}\": {kind}")]
pub struct LexicalError {
    /// Line of the offending token (1-based).
    pub line: u32,
    /// Byte column of the offending token (0-based).
    pub column: u32,
    /// Byte offset of the offending token.
    pub offset: usize,
    /// The offending text.
    pub text: String,
    /// Source text following the error location, truncated.
    pub near: String,
    /// The cause.
    pub kind: LexErrorKind,
}
