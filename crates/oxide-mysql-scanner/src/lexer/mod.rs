//! MySQL Lexer/Tokenizer
//!
//! A hand-written scanner that turns MySQL text into a stream of tokens for
//! a generated parser. It runs a small state machine over the modes in
//! [`Mode`], decodes literals as it goes and records malformed input
//! without stopping.

mod cursor;
mod keyword;
pub mod literal;
mod span;
mod token;
mod tokenizer;
pub mod unescape;

pub use cursor::Cursor;
pub use keyword::Keyword;
pub use literal::{BitLiteral, HexLiteral};
pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenValue};
pub use tokenizer::{Lexer, Mode};
