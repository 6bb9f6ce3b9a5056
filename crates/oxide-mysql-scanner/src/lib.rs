//! # oxide-mysql-scanner
//!
//! The lexical front end of a MySQL-compatible SQL parser.
//!
//! This crate provides:
//! - A pull-based [`Lexer`] producing [`Token`]s with decoded values
//! - The MySQL keyword table with its reserved/non-reserved split
//! - Charset introducers, user variables and system variables
//! - Error recording that never aborts the scan
//!
//! ## Scanning
//!
//! ```rust
//! use oxide_mysql_scanner::{Keyword, Lexer, TokenKind, TokenValue};
//!
//! let mut lexer = Lexer::new("SELECT 0x1F, @@session.autocommit");
//! let tokens = lexer.tokenize();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Select));
//! assert_eq!(tokens[1].kind, TokenKind::HexLiteral);
//! assert_eq!(
//!     tokens[3].value,
//!     TokenValue::Text("@@session.autocommit".into())
//! );
//! assert!(tokens[4].is_eof());
//! ```
//!
//! ## Errors
//!
//! Malformed input yields [`TokenKind::Invalid`] and the scan continues:
//!
//! ```rust
//! use oxide_mysql_scanner::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("SELECT 99999999999999999999, 1");
//! let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
//!
//! assert_eq!(kinds[1], TokenKind::Invalid);
//! assert_eq!(kinds[3], TokenKind::IntLiteral);
//! assert_eq!(lexer.errors().len(), 1);
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod lexer;

pub use charset::{BuiltinCharsets, CharsetInfo, CharsetRegistry};
pub use config::LexerConfig;
pub use error::{LexErrorKind, LexicalError};
pub use lexer::{Keyword, Lexer, Mode, Position, Span, Token, TokenKind, TokenValue};
