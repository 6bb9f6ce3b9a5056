//! Built-in MySQL character sets.

use super::{CharsetInfo, CharsetRegistry};

/// Name, canonical name and default collation.
const CHARSETS: &[(&str, &str, &str)] = &[
    ("armscii8", "armscii8", "armscii8_general_ci"),
    ("ascii", "ascii", "ascii_general_ci"),
    ("big5", "big5", "big5_chinese_ci"),
    ("binary", "binary", "binary"),
    ("cp1250", "cp1250", "cp1250_general_ci"),
    ("cp1251", "cp1251", "cp1251_general_ci"),
    ("cp1256", "cp1256", "cp1256_general_ci"),
    ("cp1257", "cp1257", "cp1257_general_ci"),
    ("cp850", "cp850", "cp850_general_ci"),
    ("cp852", "cp852", "cp852_general_ci"),
    ("cp866", "cp866", "cp866_general_ci"),
    ("cp932", "cp932", "cp932_japanese_ci"),
    ("dec8", "dec8", "dec8_swedish_ci"),
    ("eucjpms", "eucjpms", "eucjpms_japanese_ci"),
    ("euckr", "euckr", "euckr_korean_ci"),
    ("gb18030", "gb18030", "gb18030_chinese_ci"),
    ("gb2312", "gb2312", "gb2312_chinese_ci"),
    ("gbk", "gbk", "gbk_chinese_ci"),
    ("geostd8", "geostd8", "geostd8_general_ci"),
    ("greek", "greek", "greek_general_ci"),
    ("hebrew", "hebrew", "hebrew_general_ci"),
    ("hp8", "hp8", "hp8_english_ci"),
    ("keybcs2", "keybcs2", "keybcs2_general_ci"),
    ("koi8r", "koi8r", "koi8r_general_ci"),
    ("koi8u", "koi8u", "koi8u_general_ci"),
    ("latin1", "latin1", "latin1_swedish_ci"),
    ("latin2", "latin2", "latin2_general_ci"),
    ("latin5", "latin5", "latin5_turkish_ci"),
    ("latin7", "latin7", "latin7_general_ci"),
    ("macce", "macce", "macce_general_ci"),
    ("macroman", "macroman", "macroman_general_ci"),
    ("sjis", "sjis", "sjis_japanese_ci"),
    ("swe7", "swe7", "swe7_swedish_ci"),
    ("tis620", "tis620", "tis620_thai_ci"),
    ("ucs2", "ucs2", "ucs2_general_ci"),
    ("ujis", "ujis", "ujis_japanese_ci"),
    ("utf16", "utf16", "utf16_general_ci"),
    ("utf16le", "utf16le", "utf16le_general_ci"),
    ("utf32", "utf32", "utf32_general_ci"),
    ("utf8", "utf8", "utf8_general_ci"),
    ("utf8mb3", "utf8", "utf8_general_ci"),
    ("utf8mb4", "utf8mb4", "utf8mb4_general_ci"),
];

/// The character sets bundled with MySQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCharsets;

impl BuiltinCharsets {
    /// Creates the built-in registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CharsetRegistry for BuiltinCharsets {
    fn resolve(&self, name: &str) -> Option<CharsetInfo> {
        CHARSETS
            .iter()
            .find(|(alias, _, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, canonical, collation)| CharsetInfo::new(canonical, collation))
    }
}
