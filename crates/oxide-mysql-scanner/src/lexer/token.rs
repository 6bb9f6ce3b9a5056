//! Token types for the MySQL scanner.

use std::fmt;

use super::literal::{BitLiteral, HexLiteral};
use super::{Keyword, Position, Span};

/// The token code.
///
/// Kinds carry no payload besides the keyword, so a kind can be injected
/// ahead of the input without any source text behind it. Decoded literal
/// values travel separately in [`TokenValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal; value is `Int` or `Uint`.
    IntLiteral,
    /// Float literal (e.g., `1.5e2`).
    FloatLiteral,
    /// Hexadecimal literal (`0x1F`, `X'1F'`).
    HexLiteral,
    /// Bit literal (`0b101`, `b'101'`).
    BitLiteral,
    /// Quoted string literal.
    String,

    // Names
    /// Identifier, plain or backtick-quoted.
    Identifier,
    /// MySQL keyword.
    Keyword(Keyword),
    /// Charset introducer (e.g., `_utf8mb4`); value is the canonical name.
    UnderscoreCharset,
    /// User variable (`@name`).
    UserVariable,
    /// System variable (`@@name`, `@@global.name`).
    SystemVariable,

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// ^
    Caret,
    /// ~
    Tilde,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// &&
    LogicAnd,
    /// ||
    LogicOr,
    /// !
    Not,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <=>
    NullSafeEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// :=
    Assign,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,
    /// @
    At,
    /// `?` placeholder
    ParamMarker,

    // Synthetic start symbols, only produced through injection
    /// Selects the statement-list entry point of the grammar.
    StatementListStart,
    /// Selects the single-expression entry point of the grammar.
    ExpressionStart,

    // Special
    /// End of input
    Eof,
    /// Stands in for a malformed token; see the lexer's error list.
    Invalid,
}

impl TokenKind {
    /// Returns true for literal kinds.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral | Self::FloatLiteral | Self::HexLiteral | Self::BitLiteral | Self::String
        )
    }

    /// Returns a short printable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IntLiteral => "integer",
            Self::FloatLiteral => "float",
            Self::HexLiteral => "hex",
            Self::BitLiteral => "bit",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Keyword(kw) => kw.as_str(),
            Self::UnderscoreCharset => "charset",
            Self::UserVariable => "user variable",
            Self::SystemVariable => "system variable",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Caret => "'^'",
            Self::Tilde => "'~'",
            Self::BitAnd => "'&'",
            Self::BitOr => "'|'",
            Self::LogicAnd => "'&&'",
            Self::LogicOr => "'||'",
            Self::Not => "'!'",
            Self::Eq => "'='",
            Self::NotEq => "'!='",
            Self::NullSafeEq => "'<=>'",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::LeftShift => "'<<'",
            Self::RightShift => "'>>'",
            Self::Assign => "':='",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::At => "'@'",
            Self::ParamMarker => "'?'",
            Self::StatementListStart => "statement list start",
            Self::ExpressionStart => "expression start",
            Self::Eof => "end of input",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded value attached to a token.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    /// No value.
    #[default]
    None,
    /// Text: string contents, identifier or variable names, surface text
    /// of non-reserved keywords.
    Text(String),
    /// Integer that fits in `i64`.
    Int(i64),
    /// Integer above `i64::MAX`.
    Uint(u64),
    /// Floating-point number.
    Float(f64),
    /// Hexadecimal literal bytes.
    Hex(HexLiteral),
    /// Fixed-width bit string.
    Bits(BitLiteral),
}

impl TokenValue {
    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if no value is attached.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Hex(h) => write!(f, "{h}"),
            Self::Bits(b) => write!(f, "{b}"),
        }
    }
}

/// A token with its value and location in the source code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The token code.
    pub kind: TokenKind,
    /// The decoded value, if the kind carries one.
    pub value: TokenValue,
    /// Line, column and offset of the first byte.
    pub pos: Position,
    /// Byte range covered in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, value: TokenValue, pos: Position, span: Span) -> Self {
        Self {
            kind,
            value,
            pos,
            span,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.kind)?;
        if !self.value.is_none() {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, value: TokenValue) -> Token {
        Token::new(kind, value, Position::start(), Span::new(0, 1))
    }

    #[test]
    fn test_token_is_eof() {
        assert!(token(TokenKind::Eof, TokenValue::None).is_eof());
        assert!(!token(TokenKind::Plus, TokenValue::None).is_eof());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = token(TokenKind::Keyword(Keyword::Select), TokenValue::None);
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(token(TokenKind::Plus, TokenValue::None).as_keyword(), None);
    }

    #[test]
    fn test_display() {
        let t = token(TokenKind::String, TokenValue::Text("it's".into()));
        assert_eq!(t.to_string(), "1:0 string \"it's\"");
        let t = token(TokenKind::Keyword(Keyword::From), TokenValue::None);
        assert_eq!(t.to_string(), "1:0 FROM");
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::HexLiteral.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
    }
}
