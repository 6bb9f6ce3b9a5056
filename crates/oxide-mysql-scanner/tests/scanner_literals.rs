//! Tests for numeric, hex, bit and string literals.

mod common;
use common::*;

use oxide_mysql_scanner::lexer::{BitLiteral, HexLiteral};
use oxide_mysql_scanner::{TokenKind, TokenValue};

#[test]
fn literal_decimal_integer() {
    let t = single("42");
    assert_eq!(t.kind, TokenKind::IntLiteral);
    assert_eq!(t.value, TokenValue::Int(42));
}

#[test]
fn literal_octal_integer() {
    assert_eq!(single("017").value, TokenValue::Int(15));
    assert_eq!(single("00").value, TokenValue::Int(0));
}

#[test]
fn literal_leading_zero_with_non_octal_digit_is_decimal() {
    assert_eq!(single("018").value, TokenValue::Int(18));
}

#[test]
fn literal_integer_above_i64_is_unsigned() {
    assert_eq!(
        single("18446744073709551615").value,
        TokenValue::Uint(u64::MAX)
    );
}

#[test]
fn literal_floats() {
    assert_eq!(
        values("1.5 .25 3. 2e3 7E-1 1.5e+2"),
        vec![
            TokenValue::Float(1.5),
            TokenValue::Float(0.25),
            TokenValue::Float(3.0),
            TokenValue::Float(2000.0),
            TokenValue::Float(0.7),
            TokenValue::Float(150.0),
        ]
    );
    assert!(kinds("1.5 .25 3. 2e3")
        .iter()
        .all(|k| *k == TokenKind::FloatLiteral));
}

#[test]
fn literal_hex_forms() {
    let t = single("0xFF");
    assert_eq!(t.kind, TokenKind::HexLiteral);
    assert_eq!(t.value, TokenValue::Hex(HexLiteral::new(vec![0xFF])));

    let t = single("X'0aFF'");
    assert_eq!(t.value, TokenValue::Hex(HexLiteral::new(vec![0x0A, 0xFF])));

    let t = single("x''");
    assert_eq!(t.kind, TokenKind::HexLiteral);
    assert_eq!(t.value, TokenValue::Hex(HexLiteral::new(Vec::new())));
}

#[test]
fn literal_hex_odd_digits_pads_unquoted_form() {
    let t = single("0xABC");
    assert_eq!(t.value, TokenValue::Hex(HexLiteral::new(vec![0x0A, 0xBC])));
}

#[test]
fn literal_hex_falls_back_to_string() {
    let t = single("X'ABC'");
    assert_eq!(t.kind, TokenKind::String);
    assert_eq!(t.value, text("ABC"));

    let t = single("x'0G'");
    assert_eq!(t.kind, TokenKind::String);
    assert_eq!(t.value, text("0G"));
    assert!(lex_errors("X'ABC' x'0G'").is_empty());
}

#[test]
fn literal_hex_uuid_stays_hex() {
    let t = single("X'6ccd780cbaba102695645b8c656024db'");
    assert_eq!(t.kind, TokenKind::HexLiteral);
    let TokenValue::Hex(h) = t.value else {
        panic!("Expected hex literal");
    };
    assert_eq!(h.as_bytes().len(), 16);
    assert_eq!(&h.as_bytes()[..2], &[0x6C, 0xCD]);
    assert_eq!(h.to_u64(), None);
}

#[test]
fn literal_long_unquoted_hex_stays_hex() {
    let t = single("0x0102030405060708FF");
    assert_eq!(t.kind, TokenKind::HexLiteral);
    assert_eq!(
        t.value,
        TokenValue::Hex(HexLiteral::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 0xFF]))
    );
    assert!(lex_errors("0x0102030405060708FF").is_empty());
}

#[test]
fn literal_bit_leading_zeros_beyond_64_digits() {
    let sql = format!("0b{}1", "0".repeat(70));
    assert_eq!(
        single(&sql).value,
        TokenValue::Bits(BitLiteral { value: 1, width: 64 })
    );
}

#[test]
fn literal_hex_to_u64() {
    let TokenValue::Hex(h) = single("0x00000000000000FFFF").value else {
        panic!("Expected hex literal");
    };
    assert_eq!(h.to_u64(), Some(0xFFFF));
}

#[test]
fn literal_bit_forms() {
    assert_eq!(
        values("0b101 b'0011' B''"),
        vec![
            TokenValue::Bits(BitLiteral { value: 5, width: 3 }),
            TokenValue::Bits(BitLiteral { value: 3, width: 4 }),
            TokenValue::Bits(BitLiteral { value: 0, width: 1 }),
        ]
    );
}

#[test]
fn literal_prefix_without_digits_splits() {
    assert_eq!(
        kinds("0x 0b"),
        vec![
            TokenKind::IntLiteral,
            TokenKind::Identifier,
            TokenKind::IntLiteral,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn literal_uppercase_prefix_is_not_hex() {
    assert_eq!(
        values("0X1F"),
        vec![TokenValue::Int(0), text("X1F")]
    );
}

#[test]
fn literal_single_quoted_string() {
    let t = single("'hello world'");
    assert_eq!(t.kind, TokenKind::String);
    assert_eq!(t.value, text("hello world"));
}

#[test]
fn literal_double_quoted_string() {
    let t = single("\"hello\"");
    assert_eq!(t.kind, TokenKind::String);
    assert_eq!(t.value, text("hello"));
}

#[test]
fn literal_doubled_quote_folds() {
    assert_eq!(single("'it''s'").value, text("it's"));
    assert_eq!(single(r#""say ""hi""""#).value, text("say \"hi\""));
}

#[test]
fn literal_backslash_escapes() {
    assert_eq!(single(r"'a\tb\nc'").value, text("a\tb\nc"));
    assert_eq!(single(r"'it\'s'").value, text("it's"));
    assert_eq!(single(r"'back\\slash'").value, text("back\\slash"));
    assert_eq!(single(r"'100\%'").value, text(r"100\%"));
}

#[test]
fn literal_empty_strings() {
    assert_eq!(values("'' \"\""), vec![text(""), text("")]);
}

#[test]
fn literal_multiline_string_tracks_lines() {
    let tokens = lex("'a\nb' x");
    assert_eq!(tokens[0].value, text("a\nb"));
    assert_eq!(tokens[1].pos.line, 2);
    assert_eq!(tokens[1].pos.column, 3);
}

#[test]
fn literal_string_spans_cover_quotes() {
    let tokens = lex("SELECT 'abc'");
    assert_eq!(tokens[1].span.text("SELECT 'abc'"), Some("'abc'"));
}
