//! Lexer configuration.

use crate::charset::CharsetInfo;

/// Default number of characters quoted after an error location.
pub const DEFAULT_ERROR_CONTEXT_LEN: usize = 80;

/// Settings a [`Lexer`](crate::Lexer) starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerConfig {
    /// Maximum number of characters of trailing source kept in an error's
    /// `near` text.
    pub error_context_len: usize,
    /// Initial charset/collation pair. Empty means no override.
    pub charset: CharsetInfo,
    /// Initial prepare-mode flag.
    pub prepare: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            error_context_len: DEFAULT_ERROR_CONTEXT_LEN,
            charset: CharsetInfo::default(),
            prepare: false,
        }
    }
}

impl LexerConfig {
    /// Sets the error context length.
    #[must_use]
    pub const fn with_error_context_len(mut self, len: usize) -> Self {
        self.error_context_len = len;
        self
    }

    /// Sets the initial charset/collation pair.
    #[must_use]
    pub fn with_charset(mut self, charset: CharsetInfo) -> Self {
        self.charset = charset;
        self
    }

    /// Sets the initial prepare-mode flag.
    #[must_use]
    pub const fn with_prepare(mut self, prepare: bool) -> Self {
        self.prepare = prepare;
        self
    }
}
