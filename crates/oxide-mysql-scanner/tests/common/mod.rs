#![allow(dead_code)]

use oxide_mysql_scanner::{Lexer, LexicalError, Token, TokenKind, TokenValue};

/// Every token of `sql`, EOF included.
pub fn lex(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

/// Token kinds of `sql`, EOF excluded.
pub fn kinds(sql: &str) -> Vec<TokenKind> {
    Lexer::new(sql).map(|t| t.kind).collect()
}

/// Token values of `sql`, EOF excluded.
pub fn values(sql: &str) -> Vec<TokenValue> {
    Lexer::new(sql).map(|t| t.value).collect()
}

/// The only token of `sql` before EOF.
pub fn single(sql: &str) -> Token {
    let tokens: Vec<Token> = Lexer::new(sql).collect();
    assert_eq!(tokens.len(), 1, "Expected one token for: {sql}\nGot: {tokens:?}");
    tokens.into_iter().next().unwrap()
}

/// Errors recorded while scanning all of `sql`.
pub fn lex_errors(sql: &str) -> Vec<LexicalError> {
    let mut lexer = Lexer::new(sql);
    let _ = lexer.tokenize();
    lexer.errors().to_vec()
}

pub fn text(s: &str) -> TokenValue {
    TokenValue::Text(s.to_owned())
}
