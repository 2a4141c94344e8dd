use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique, ordered identifier for a Lesson
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(u32);

impl LessonId {
    /// Creates a new `LessonId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id directly after this one, i.e. the lesson unlocked by completing this one.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// Short language code such as `es` or `ja`.
///
/// Stored lowercased and trimmed so lookups are not sensitive to how the code was typed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageCodeError {
    #[error("language code cannot be empty")]
    Empty,

    #[error("language code must be ASCII letters or '-': {0}")]
    InvalidCharacters(String),
}

impl LanguageCode {
    /// Create a validated language code.
    ///
    /// # Errors
    ///
    /// Returns `LanguageCodeError::Empty` for blank input and
    /// `LanguageCodeError::InvalidCharacters` for anything outside `[A-Za-z-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, LanguageCodeError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LanguageCodeError::Empty);
        }
        if !trimmed.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-') {
            return Err(LanguageCodeError::InvalidCharacters(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Debug for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageCode({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_id_display() {
        let id = LessonId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_lesson_id_next() {
        assert_eq!(LessonId::new(1).next(), Some(LessonId::new(2)));
        assert_eq!(LessonId::new(u32::MAX).next(), None);
    }

    #[test]
    fn test_language_code_normalizes() {
        let code = LanguageCode::new("  ES ").unwrap();
        assert_eq!(code.as_str(), "es");
        assert_eq!(code.to_string(), "es");
    }

    #[test]
    fn test_language_code_rejects_blank_and_symbols() {
        assert_eq!(LanguageCode::new("   "), Err(LanguageCodeError::Empty));
        assert!(matches!(
            LanguageCode::new("e$"),
            Err(LanguageCodeError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_language_code_deserializes_through_validation() {
        let code: LanguageCode = serde_json::from_str("\"FR\"").unwrap();
        assert_eq!(code.as_str(), "fr");
        assert!(serde_json::from_str::<LanguageCode>("\"\"").is_err());
    }
}
