//! Character set resolution.
//!
//! Charset names reach the scanner through introducers such as
//! `_utf8mb4'text'`. Whether a name is a known charset is not the scanner's
//! business, so it asks a [`CharsetRegistry`]. [`BuiltinCharsets`] covers
//! the character sets MySQL ships with.

mod builtin;

pub use builtin::BuiltinCharsets;

/// A character set paired with a collation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharsetInfo {
    /// Canonical charset name (e.g., `utf8mb4`).
    pub charset: String,
    /// Collation name (e.g., `utf8mb4_general_ci`).
    pub collation: String,
}

impl CharsetInfo {
    /// Creates a new charset/collation pair.
    #[must_use]
    pub fn new(charset: impl Into<String>, collation: impl Into<String>) -> Self {
        Self {
            charset: charset.into(),
            collation: collation.into(),
        }
    }

    /// Returns true if neither a charset nor a collation is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charset.is_empty() && self.collation.is_empty()
    }
}

/// Looks up character sets by name.
pub trait CharsetRegistry {
    /// Resolves `name` (case-insensitive) to its canonical name and
    /// default collation, or `None` if the charset is unknown.
    fn resolve(&self, name: &str) -> Option<CharsetInfo>;
}
