//! Backslash-escape decoding for quoted string literals.

/// A backslash with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("dangling backslash at byte {0}")]
pub struct DanglingEscape(pub usize);

/// Decodes MySQL backslash escapes.
///
/// Recognized sequences are `\0 \' \" \b \n \r \t \Z \\`. `\%` and `\_`
/// keep their backslash so `LIKE` patterns still see the escape. Any other
/// escaped byte stands for itself.
///
/// # Errors
///
/// Returns [`DanglingEscape`] if `raw` ends in a lone backslash.
pub fn unescape(raw: &[u8]) -> Result<Vec<u8>, DanglingEscape> {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied().enumerate();
    while let Some((i, b)) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let Some((_, escaped)) = bytes.next() else {
            return Err(DanglingEscape(i));
        };
        match escaped {
            b'0' => out.push(0),
            b'b' => out.push(0x08),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'Z' => out.push(0x1A),
            b'%' | b'_' => out.extend_from_slice(&[b'\\', escaped]),
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Builds the value of a quoted string, keeping `raw` as written if the
/// escapes do not decode.
#[must_use]
pub fn string_value(raw: &[u8]) -> String {
    match unescape(raw) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::debug!(%err, "keeping string literal undecoded");
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}
