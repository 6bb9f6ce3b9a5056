//! Numeric, hexadecimal and bit literal decoding.
//!
//! The scanner classifies a lexeme and hands the raw digits here. Integer,
//! float and bit failures become lexical errors; hex failures are reported
//! back so the scanner can fall back to a string token.

use std::fmt;

use super::TokenValue;
use crate::error::LexErrorKind;

/// Bytes of a hexadecimal literal, most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLiteral(Vec<u8>);

impl HexLiteral {
    /// Wraps raw bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the decoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Interprets the bytes as a big-endian unsigned number.
    ///
    /// Returns `None` when more than eight significant bytes are present.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        let significant = significant_bytes(&self.0);
        if significant.len() > 8 {
            return None;
        }
        Some(
            significant
                .iter()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
        )
    }
}

impl fmt::Display for HexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for b in &self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

/// A fixed-width bit string of at most 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitLiteral {
    /// The bits, right-aligned.
    pub value: u64,
    /// Number of bit positions written in the source (at least 1).
    pub width: u8,
}

impl fmt::Display for BitLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b'{:0width$b}'", self.value, width = usize::from(self.width))
    }
}

/// Why a hexadecimal literal could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// Quoted form with an odd number of digits.
    #[error("odd number of hex digits")]
    OddDigits,
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

fn significant_bytes(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

const fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes the digits of a hex literal.
///
/// `quoted` selects the `X'..'` form, which requires an even digit count.
/// The `0x` form is left-padded with a zero instead.
///
/// # Errors
///
/// Returns a [`HexError`] for a non-hex digit or an odd quoted digit count.
/// Any number of digits is accepted; see [`HexLiteral::to_u64`] for the
/// numeric width limit.
pub fn decode_hex(digits: &str, quoted: bool) -> Result<HexLiteral, HexError> {
    let raw = digits.as_bytes();
    if let Some(&bad) = raw.iter().find(|&&c| hex_nibble(c).is_none()) {
        return Err(HexError::InvalidDigit(char::from(bad)));
    }
    if quoted && raw.len() % 2 != 0 {
        return Err(HexError::OddDigits);
    }

    let mut nibbles: Vec<u8> = raw.iter().filter_map(|&c| hex_nibble(c)).collect();
    if nibbles.len() % 2 != 0 {
        nibbles.insert(0, 0);
    }
    let bytes: Vec<u8> = nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect();
    Ok(HexLiteral(bytes))
}

/// Decodes the digits of a bit literal.
///
/// # Errors
///
/// Fails on a digit other than `0`/`1` or on more than 64 significant
/// digits. Leading zeros beyond 64 only widen the literal up to the cap.
pub fn decode_bit(digits: &str) -> Result<BitLiteral, LexErrorKind> {
    if let Some(bad) = digits.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(LexErrorKind::InvalidBit(format!("invalid binary digit {bad:?}")));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > 64 {
        return Err(LexErrorKind::InvalidBit(format!(
            "{} significant digits exceed 64 bits",
            significant.len()
        )));
    }
    let width = u8::try_from(digits.len().clamp(1, 64)).unwrap_or(64);
    let value = significant
        .bytes()
        .fold(0u64, |acc, b| (acc << 1) | u64::from(b - b'0'));
    Ok(BitLiteral { value, width })
}

/// Decodes an all-digit run.
///
/// A leading `0` followed only by octal digits selects base 8. Values that
/// fit in `i64` come back as `Int`, larger ones as `Uint`.
///
/// # Errors
///
/// Fails when the value does not fit in `u64`.
pub fn decode_integer(digits: &str) -> Result<TokenValue, LexErrorKind> {
    let octal = digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| matches!(b, b'0'..=b'7'));
    let radix = if octal { 8 } else { 10 };

    let n = u64::from_str_radix(digits, radix)
        .map_err(|e| LexErrorKind::InvalidInteger(e.to_string()))?;
    Ok(i64::try_from(n).map_or(TokenValue::Uint(n), TokenValue::Int))
}

/// Decodes a float lexeme (digits with a decimal point and/or exponent).
///
/// # Errors
///
/// Fails on malformed text or a value outside the finite `f64` range.
pub fn decode_float(text: &str) -> Result<f64, LexErrorKind> {
    let x: f64 = text
        .parse()
        .map_err(|e: std::num::ParseFloatError| LexErrorKind::InvalidFloat(e.to_string()))?;
    if x.is_finite() {
        Ok(x)
    } else {
        Err(LexErrorKind::InvalidFloat(String::from("value out of range")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bases() {
        assert_eq!(decode_integer("10"), Ok(TokenValue::Int(10)));
        assert_eq!(decode_integer("010"), Ok(TokenValue::Int(8)));
        assert_eq!(decode_integer("0"), Ok(TokenValue::Int(0)));
        assert_eq!(decode_integer("09"), Ok(TokenValue::Int(9)));
        assert_eq!(decode_integer("0777"), Ok(TokenValue::Int(511)));
    }

    #[test]
    fn test_integer_signedness() {
        assert_eq!(
            decode_integer("9223372036854775807"),
            Ok(TokenValue::Int(i64::MAX))
        );
        assert_eq!(
            decode_integer("9223372036854775808"),
            Ok(TokenValue::Uint(9_223_372_036_854_775_808))
        );
        assert_eq!(
            decode_integer("18446744073709551615"),
            Ok(TokenValue::Uint(u64::MAX))
        );
    }

    #[test]
    fn test_integer_overflow() {
        assert!(matches!(
            decode_integer("18446744073709551616"),
            Err(LexErrorKind::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_float() {
        assert_eq!(decode_float("1.5e2"), Ok(150.0));
        assert_eq!(decode_float(".5"), Ok(0.5));
        assert_eq!(decode_float("1."), Ok(1.0));
        assert!(matches!(decode_float("1e999"), Err(LexErrorKind::InvalidFloat(_))));
    }

    #[test]
    fn test_hex() {
        let h = decode_hex("1F", false).unwrap();
        assert_eq!(h.as_bytes(), &[0x1F]);
        assert_eq!(h.to_u64(), Some(31));
        assert_eq!(decode_hex("abc", false).unwrap().as_bytes(), &[0x0A, 0xBC]);
        assert_eq!(decode_hex("", true).unwrap().as_bytes(), &[] as &[u8]);
        assert_eq!(h.to_string(), "0x1F");
    }

    #[test]
    fn test_hex_failures() {
        assert_eq!(decode_hex("ABC", true), Err(HexError::OddDigits));
        assert_eq!(decode_hex("G1", true), Err(HexError::InvalidDigit('G')));
    }

    #[test]
    fn test_hex_wider_than_u64() {
        let uuid = decode_hex("6ccd780cbaba102695645b8c656024db", true).unwrap();
        assert_eq!(uuid.as_bytes().len(), 16);
        assert_eq!(uuid.as_bytes()[0], 0x6C);
        assert_eq!(uuid.to_u64(), None);

        let h = decode_hex("0102030405060708FF", false).unwrap();
        assert_eq!(h.as_bytes().len(), 9);
        assert_eq!(h.to_u64(), None);
        assert_eq!(
            decode_hex("000102030405060708", true).unwrap().to_u64(),
            Some(0x0102_0304_0506_0708)
        );
    }

    #[test]
    fn test_bit() {
        assert_eq!(decode_bit("101"), Ok(BitLiteral { value: 5, width: 3 }));
        assert_eq!(decode_bit(""), Ok(BitLiteral { value: 0, width: 1 }));
        assert_eq!(decode_bit("0101").unwrap().to_string(), "b'0101'");
        assert!(matches!(decode_bit("102"), Err(LexErrorKind::InvalidBit(_))));
        assert!(matches!(
            decode_bit(&"1".repeat(65)),
            Err(LexErrorKind::InvalidBit(_))
        ));
        assert_eq!(
            decode_bit(&format!("{}1", "0".repeat(70))),
            Ok(BitLiteral { value: 1, width: 64 })
        );
        assert_eq!(
            decode_bit(&"1".repeat(64)),
            Ok(BitLiteral {
                value: u64::MAX,
                width: 64
            })
        );
    }
}
