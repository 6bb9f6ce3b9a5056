//! MySQL tokenizer implementation.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::literal;
use super::unescape;
use super::{Keyword, Position, Span, Token, TokenKind, TokenValue};
use crate::charset::{BuiltinCharsets, CharsetInfo, CharsetRegistry};
use crate::config::LexerConfig;
use crate::error::{LexErrorKind, LexicalError};

static BUILTIN_CHARSETS: BuiltinCharsets = BuiltinCharsets::new();

/// The lexical mode the scanner is in. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain SQL text.
    Default,
    /// Seen `--`; the next byte decides between comment and minus.
    DashProbe,
    /// Inside `"..."`.
    DoubleQuoted,
    /// Inside `'...'`.
    SingleQuoted,
    /// Inside `` `...` ``.
    Backtick,
}

/// Closing byte and post-processing of a quoted mode.
#[derive(Debug, Clone, Copy)]
struct Quote {
    close: u8,
    kind: TokenKind,
    decode_escapes: bool,
}

impl Mode {
    const fn quote(self) -> Option<Quote> {
        match self {
            Self::SingleQuoted => Some(Quote {
                close: b'\'',
                kind: TokenKind::String,
                decode_escapes: true,
            }),
            Self::DoubleQuoted => Some(Quote {
                close: b'"',
                kind: TokenKind::String,
                decode_escapes: true,
            }),
            Self::Backtick => Some(Quote {
                close: b'`',
                kind: TokenKind::Identifier,
                decode_escapes: false,
            }),
            Self::Default | Self::DashProbe => None,
        }
    }
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

const fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

const fn is_user_var_char(b: u8) -> bool {
    is_ident_char(b) || b == b'.'
}

/// A pull-based scanner over one SQL source.
///
/// Each call to [`Lexer::next_token`] yields one token. Malformed tokens come
/// back as [`TokenKind::Invalid`] with the cause appended to
/// [`Lexer::errors`]; the scan itself never stops early.
pub struct Lexer<'a> {
    /// The input source code.
    src: &'a str,
    cursor: Cursor<'a>,
    mode: Mode,
    /// Position of the first byte of the token being scanned.
    start: Position,
    /// Contents of the quoted literal being scanned.
    literal: Vec<u8>,
    injected: Option<TokenKind>,
    errors: Vec<LexicalError>,
    /// Offset where the current statement's text begins.
    stmt_start: usize,
    charset: CharsetInfo,
    prepare: bool,
    root: bool,
    registry: &'a dyn CharsetRegistry,
    error_context_len: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input with default settings.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self::with_config(src, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration and the built-in
    /// charset registry.
    #[must_use]
    pub fn with_config(src: &'a str, config: LexerConfig) -> Self {
        Self::with_registry(src, config, &BUILTIN_CHARSETS)
    }

    /// Creates a lexer that resolves charset introducers through `registry`.
    #[must_use]
    pub fn with_registry(
        src: &'a str,
        config: LexerConfig,
        registry: &'a dyn CharsetRegistry,
    ) -> Self {
        Self {
            src,
            cursor: Cursor::new(src),
            mode: Mode::Default,
            start: Position::start(),
            literal: Vec::new(),
            injected: None,
            errors: Vec::new(),
            stmt_start: 0,
            charset: config.charset,
            prepare: config.prepare,
            root: false,
            registry,
            error_context_len: config.error_context_len,
        }
    }

    /// Scans the next token.
    ///
    /// An injected token, if any, is returned first without touching the
    /// cursor. At end of input every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        if let Some(kind) = self.injected.take() {
            trace!(%kind, "returning injected token");
            let pos = self.cursor.position();
            return Token::new(kind, TokenValue::None, pos, Span::empty(pos.offset));
        }

        loop {
            let step = match self.mode.quote() {
                Some(quote) => Some(self.scan_quoted(quote)),
                None if self.mode == Mode::DashProbe => self.probe_dash(),
                None => self.scan_default(),
            };
            if let Some(token) = step {
                return token;
            }
        }
    }

    /// Tokenizes the entire remaining input, including the final EOF token.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Makes the next [`Lexer::next_token`] call return `kind`.
    pub fn inject(&mut self, kind: TokenKind) {
        self.injected = Some(kind);
    }

    /// Lexical errors recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Returns true if any lexical error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the text scanned since the previous call (or since the
    /// start), and starts a new statement at the current position.
    ///
    /// One leading and one trailing newline are dropped if present.
    pub fn take_statement_text(&mut self) -> &'a str {
        let offset = self.cursor.offset();
        let bytes = self.src.as_bytes();
        let mut start = self.stmt_start.min(offset);
        let mut end = offset;
        if end > start && bytes.get(end - 1) == Some(&b'\n') {
            end -= 1;
        }
        if start < end && bytes.get(start) == Some(&b'\n') {
            start += 1;
        }
        self.stmt_start = offset;
        trace!(start, end, "statement text taken");
        self.slice(start, end)
    }

    /// Sets the prepare-mode flag.
    pub fn set_prepare_mode(&mut self, prepare: bool) {
        self.prepare = prepare;
    }

    /// Returns the prepare-mode flag.
    #[must_use]
    pub const fn is_prepare_mode(&self) -> bool {
        self.prepare
    }

    /// Sets the root flag.
    pub fn set_root(&mut self, root: bool) {
        self.root = root;
    }

    /// Returns the root flag.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.root
    }

    /// Sets the active charset/collation pair.
    pub fn set_charset_info(&mut self, charset: impl Into<String>, collation: impl Into<String>) {
        self.charset = CharsetInfo::new(charset, collation);
    }

    /// Returns the active charset/collation pair.
    #[must_use]
    pub const fn charset_info(&self) -> &CharsetInfo {
        &self.charset
    }

    /// Returns the position of the next unread byte.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the current lexical mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the source being scanned.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.src
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or_default()
    }

    /// Text of the token being scanned.
    fn lexeme(&self) -> &'a str {
        self.slice(self.start.offset, self.cursor.offset())
    }

    fn make_token(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::new(
            kind,
            value,
            self.start,
            Span::new(self.start.offset, self.cursor.offset()),
        )
    }

    /// Records `kind` against the token being scanned and returns the
    /// invalid-token sentinel in its place.
    fn error_token(&mut self, kind: LexErrorKind) -> Token {
        let near: String = self
            .src
            .get(self.start.offset..)
            .unwrap_or_default()
            .chars()
            .take(self.error_context_len)
            .collect();
        debug!(
            line = self.start.line,
            column = self.start.column,
            %kind,
            "lexical error"
        );
        let text = self.lexeme().to_owned();
        self.errors.push(LexicalError {
            line: self.start.line,
            column: self.start.column,
            offset: self.start.offset,
            text,
            near,
            kind,
        });
        self.make_token(TokenKind::Invalid, TokenValue::None)
    }

    /// Skips whitespace, `#` comments and `/* */` comments.
    ///
    /// Returns an invalid token if a block comment runs off the end.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            self.cursor.advance_while(is_whitespace);
            match self.cursor.peek() {
                Some(b'#') => self.skip_line(),
                Some(b'/') => {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    if self.cursor.advance_if(|b| b == b'*').is_none() {
                        self.cursor.unread(b'/');
                        return None;
                    }
                    if !self.skip_block_comment() {
                        self.start = start;
                        return Some(self.error_token(LexErrorKind::UnterminatedComment));
                    }
                }
                _ => return None,
            }
        }
    }

    /// Skips to the end of the line, leaving the newline itself.
    fn skip_line(&mut self) {
        self.cursor.advance_while(|b| b != b'\n');
    }

    /// Skips the body of a block comment. Returns false at end of input.
    fn skip_block_comment(&mut self) -> bool {
        while let Some(b) = self.cursor.advance() {
            if b == b'*' && self.cursor.advance_if(|b| b == b'/').is_some() {
                return true;
            }
        }
        false
    }

    /// Scans in default mode. Returns `None` after switching modes.
    fn scan_default(&mut self) -> Option<Token> {
        if let Some(invalid) = self.skip_trivia() {
            return Some(invalid);
        }
        self.start = self.cursor.position();

        let Some(c) = self.cursor.advance() else {
            return Some(self.make_token(TokenKind::Eof, TokenValue::None));
        };
        let next = self.cursor.peek();

        let kind = match c {
            b'-' => {
                if self.cursor.advance_if(|b| b == b'-').is_some() {
                    self.mode = Mode::DashProbe;
                    return None;
                }
                TokenKind::Minus
            }
            b'\'' => return self.enter_quoted(Mode::SingleQuoted),
            b'"' => return self.enter_quoted(Mode::DoubleQuoted),
            b'`' => return self.enter_quoted(Mode::Backtick),

            b'0'..=b'9' => return Some(self.scan_number(c)),
            b'.' if next.is_some_and(|b| b.is_ascii_digit()) => return Some(self.scan_number(c)),
            b'x' | b'X' if next == Some(b'\'') => return Some(self.scan_quoted_digits(true)),
            b'b' | b'B' if next == Some(b'\'') => return Some(self.scan_quoted_digits(false)),
            c if is_ident_start(c) => return Some(self.scan_identifier()),
            b'@' => return Some(self.scan_variable()),

            b'+' => TokenKind::Plus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'^' => TokenKind::Caret,
            b'~' => TokenKind::Tilde,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'.' => TokenKind::Dot,
            b'?' => TokenKind::ParamMarker,
            b'=' => TokenKind::Eq,
            b'&' => self.pick(b'&', TokenKind::LogicAnd, TokenKind::BitAnd),
            b'|' => self.pick(b'|', TokenKind::LogicOr, TokenKind::BitOr),
            b'!' => self.pick(b'=', TokenKind::NotEq, TokenKind::Not),
            b':' => self.pick(b'=', TokenKind::Assign, TokenKind::Colon),
            b'<' => match next {
                Some(b'=') => {
                    self.cursor.advance();
                    self.pick(b'>', TokenKind::NullSafeEq, TokenKind::LtEq)
                }
                Some(b'>') => {
                    self.cursor.advance();
                    TokenKind::NotEq
                }
                Some(b'<') => {
                    self.cursor.advance();
                    TokenKind::LeftShift
                }
                _ => TokenKind::Lt,
            },
            b'>' => match next {
                Some(b'=') => {
                    self.cursor.advance();
                    TokenKind::GtEq
                }
                Some(b'>') => {
                    self.cursor.advance();
                    TokenKind::RightShift
                }
                _ => TokenKind::Gt,
            },

            other => {
                return Some(self.error_token(LexErrorKind::UnexpectedCharacter(char::from(other))));
            }
        };
        Some(self.make_token(kind, TokenValue::None))
    }

    /// Consumes `second` and returns `matched` if it comes next, otherwise
    /// returns `single`.
    fn pick(&mut self, second: u8, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.advance_if(|b| b == second).is_some() {
            matched
        } else {
            single
        }
    }

    /// Decides what `--` was: a line comment when followed by whitespace or
    /// end of input, otherwise a single minus with the following byte
    /// handed back for re-lexing.
    fn probe_dash(&mut self) -> Option<Token> {
        self.mode = Mode::Default;
        match self.cursor.advance() {
            None | Some(b'\n') => None,
            Some(b) if is_whitespace(b) => {
                self.skip_line();
                None
            }
            Some(b) => {
                self.cursor.unread(b);
                Some(self.make_token(TokenKind::Minus, TokenValue::None))
            }
        }
    }

    fn enter_quoted(&mut self, mode: Mode) -> Option<Token> {
        self.literal.clear();
        self.mode = mode;
        None
    }

    /// Accumulates a quoted literal up to its closing delimiter.
    ///
    /// A doubled delimiter stands for one literal delimiter. A backslash and
    /// the byte after it are kept as written; escapes are decoded once the
    /// literal is complete.
    fn scan_quoted(&mut self, quote: Quote) -> Token {
        loop {
            match self.cursor.advance() {
                None => {
                    self.mode = Mode::Default;
                    let kind = if quote.kind == TokenKind::Identifier {
                        LexErrorKind::UnterminatedIdentifier
                    } else {
                        LexErrorKind::UnterminatedString
                    };
                    return self.error_token(kind);
                }
                Some(b) if b == quote.close => {
                    if self.cursor.advance_if(|n| n == quote.close).is_none() {
                        break;
                    }
                    self.literal.push(quote.close);
                }
                Some(b'\\') => {
                    self.literal.push(b'\\');
                    if let Some(escaped) = self.cursor.advance() {
                        self.literal.push(escaped);
                    }
                }
                Some(b) => self.literal.push(b),
            }
        }

        self.mode = Mode::Default;
        let text = if quote.decode_escapes {
            unescape::string_value(&self.literal)
        } else {
            String::from_utf8_lossy(&self.literal).into_owned()
        };
        self.make_token(quote.kind, TokenValue::Text(text))
    }

    /// Scans a number whose first byte (a digit or `.`) is consumed.
    fn scan_number(&mut self, first: u8) -> Token {
        if first == b'0' {
            if let Some(token) = self.scan_prefixed_number() {
                return token;
            }
        }

        let mut is_float = first == b'.';
        self.cursor.advance_while(|b| b.is_ascii_digit());
        if !is_float && self.cursor.advance_if(|b| b == b'.').is_some() {
            is_float = true;
            self.cursor.advance_while(|b| b.is_ascii_digit());
        }
        if self.scan_exponent() {
            is_float = true;
        }

        let text = self.lexeme();
        let decoded = if is_float {
            literal::decode_float(text).map(|x| (TokenKind::FloatLiteral, TokenValue::Float(x)))
        } else {
            literal::decode_integer(text).map(|v| (TokenKind::IntLiteral, v))
        };
        match decoded {
            Ok((kind, value)) => self.make_token(kind, value),
            Err(cause) => self.error_token(cause),
        }
    }

    /// Scans `0x...` or `0b...` after the leading `0`. Returns `None`, with
    /// nothing consumed, if no valid digit follows the marker.
    fn scan_prefixed_number(&mut self) -> Option<Token> {
        let marker = self.cursor.advance_if(|b| matches!(b, b'x' | b'b'))?;
        let is_digit: fn(u8) -> bool = if marker == b'x' {
            |b| b.is_ascii_hexdigit()
        } else {
            |b| matches!(b, b'0' | b'1')
        };

        let digits_start = self.cursor.offset();
        if self.cursor.advance_while(is_digit) == 0 {
            self.cursor.unread(marker);
            return None;
        }
        let digits = self.slice(digits_start, self.cursor.offset());
        Some(if marker == b'x' {
            self.hex_token(digits, false)
        } else {
            self.bit_token(digits)
        })
    }

    /// Consumes an exponent (`e`, optional sign, digits). Anything short of
    /// a digit is handed back to the cursor.
    fn scan_exponent(&mut self) -> bool {
        let Some(e) = self.cursor.advance_if(|b| matches!(b, b'e' | b'E')) else {
            return false;
        };
        let sign = self.cursor.advance_if(|b| matches!(b, b'+' | b'-'));
        if self.cursor.advance_while(|b| b.is_ascii_digit()) > 0 {
            return true;
        }
        if let Some(sign) = sign {
            self.cursor.unread(sign);
        }
        self.cursor.unread(e);
        false
    }

    /// Scans `X'...'` or `B'...'` once the prefix letter is consumed.
    fn scan_quoted_digits(&mut self, hex: bool) -> Token {
        self.cursor.advance();
        let digits_start = self.cursor.offset();
        self.cursor.advance_while(|b| b != b'\'');
        let digits = self.slice(digits_start, self.cursor.offset());
        if self.cursor.advance().is_none() {
            return self.error_token(LexErrorKind::UnterminatedString);
        }
        if hex {
            self.hex_token(digits, true)
        } else {
            self.bit_token(digits)
        }
    }

    /// Builds a hex token, or a string token holding the digits as written
    /// when they do not decode.
    fn hex_token(&self, digits: &str, quoted: bool) -> Token {
        match literal::decode_hex(digits, quoted) {
            Ok(hex) => self.make_token(TokenKind::HexLiteral, TokenValue::Hex(hex)),
            Err(err) => {
                debug!(%err, digits, "hex literal kept as string");
                self.make_token(TokenKind::String, TokenValue::Text(digits.to_owned()))
            }
        }
    }

    fn bit_token(&mut self, digits: &str) -> Token {
        match literal::decode_bit(digits) {
            Ok(bits) => self.make_token(TokenKind::BitLiteral, TokenValue::Bits(bits)),
            Err(cause) => self.error_token(cause),
        }
    }

    /// Scans an identifier, keyword or charset introducer.
    fn scan_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_char);
        let text = self.lexeme();

        if let Some(info) = text
            .strip_prefix('_')
            .and_then(|name| self.registry.resolve(name))
        {
            return self.make_token(TokenKind::UnderscoreCharset, TokenValue::Text(info.charset));
        }

        match Keyword::lookup(text) {
            Some(kw) if kw.is_reserved() => self.make_token(TokenKind::Keyword(kw), TokenValue::None),
            Some(kw) => self.make_token(TokenKind::Keyword(kw), TokenValue::Text(text.to_owned())),
            None => self.make_token(TokenKind::Identifier, TokenValue::Text(text.to_owned())),
        }
    }

    /// Scans `@name`, `@@name` or `@@scope.name` once `@` is consumed.
    fn scan_variable(&mut self) -> Token {
        if self.cursor.advance_if(|b| b == b'@').is_none() {
            if self.cursor.advance_while(is_user_var_char) == 0 {
                return self.make_token(TokenKind::At, TokenValue::None);
            }
            return self.make_token(TokenKind::UserVariable, TokenValue::Text(self.lexeme().to_owned()));
        }

        let name_start = self.cursor.offset();
        if self.cursor.advance_while(is_ident_char) == 0 {
            return self.error_token(LexErrorKind::MissingVariableName);
        }
        let scope = self.slice(name_start, self.cursor.offset());
        let scoped = ["global", "session", "local"]
            .iter()
            .any(|s| s.eq_ignore_ascii_case(scope));
        if scoped && self.cursor.advance_if(|b| b == b'.').is_some()
            && self.cursor.advance_while(is_ident_char) == 0
        {
            self.cursor.unread(b'.');
        }
        self.make_token(TokenKind::SystemVariable, TokenValue::Text(self.lexeme().to_owned()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the EOF token.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}
