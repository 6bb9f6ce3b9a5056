//! Tests for whitespace, comments and the double-dash rule.

mod common;
use common::*;

use oxide_mysql_scanner::{Keyword, Lexer, Mode, TokenKind, TokenValue};

#[test]
fn comment_hash_runs_to_end_of_line() {
    assert_eq!(
        kinds("1 # ignored ; stuff\n2"),
        vec![TokenKind::IntLiteral, TokenKind::IntLiteral]
    );
}

#[test]
fn comment_block() {
    assert_eq!(
        kinds("1 /* a\nmulti-line\ncomment */ + 2"),
        vec![TokenKind::IntLiteral, TokenKind::Plus, TokenKind::IntLiteral]
    );
}

#[test]
fn comment_block_with_stars() {
    assert_eq!(kinds("/***/ 1 /* ** */"), vec![TokenKind::IntLiteral]);
}

#[test]
fn comment_slash_alone_is_division() {
    assert_eq!(
        kinds("4/2"),
        vec![TokenKind::IntLiteral, TokenKind::Slash, TokenKind::IntLiteral]
    );
}

#[test]
fn comment_double_dash_with_space() {
    assert_eq!(
        kinds("SELECT 1 -- trailing words\nFROM t"),
        vec![
            TokenKind::Keyword(Keyword::Select),
            TokenKind::IntLiteral,
            TokenKind::Keyword(Keyword::From),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn comment_double_dash_with_tab_and_newline() {
    assert_eq!(kinds("--\tnote\n1"), vec![TokenKind::IntLiteral]);
    assert_eq!(kinds("--\n1"), vec![TokenKind::IntLiteral]);
}

#[test]
fn comment_double_dash_newline_does_not_eat_next_line() {
    assert_eq!(
        kinds("1--\n2"),
        vec![TokenKind::IntLiteral, TokenKind::IntLiteral]
    );
}

#[test]
fn comment_double_dash_at_end_of_input() {
    assert_eq!(kinds("SELECT --").len(), 1);
    assert_eq!(lex("--").len(), 1);
}

#[test]
fn dash_dash_digit_is_single_minus() {
    let tokens = lex("--5");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Minus);
    assert_eq!(tokens[1].value, TokenValue::Int(5));
    assert!(tokens[2].is_eof());
}

#[test]
fn dash_dash_minus_span_covers_both_dashes() {
    let tokens = lex("1--2");
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (1, 3));
    assert_eq!(tokens[2].pos.offset, 3);
}

#[test]
fn dash_dash_identifier() {
    assert_eq!(
        kinds("a--b"),
        vec![TokenKind::Identifier, TokenKind::Minus, TokenKind::Identifier]
    );
}

#[test]
fn single_dash_is_minus() {
    assert_eq!(
        kinds("a - -b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Minus,
            TokenKind::Minus,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn mode_after_each_token_is_default() {
    let mut lexer = Lexer::new("'a' \"b\" `c` --d");
    while !lexer.next_token().is_eof() {
        assert_eq!(lexer.mode(), Mode::Default);
    }
}

#[test]
fn whitespace_variants() {
    assert_eq!(
        kinds("\r\n\t\x0b\x0c1"),
        vec![TokenKind::IntLiteral]
    );
}
