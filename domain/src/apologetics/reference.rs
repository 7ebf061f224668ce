//! Scripture reference detection.

use crate::core::error::DomainError;
use regex::Regex;

/// Book name (letters and spaces), then `chapter:verse`, then an optional
/// `-verse` range end.
///
/// Book names containing digits (`1 Corinthians 13:4`) do not match.
pub const DEFAULT_REFERENCE_PATTERN: &str = r"^[A-Za-z ]+\d+:\d+(-\d+)?$";

/// Classifies free text as reference-shaped or not.
#[derive(Debug, Clone)]
pub struct ScriptureReferenceClassifier {
    pattern: Regex,
}

impl ScriptureReferenceClassifier {
    /// Compile a classifier from a custom pattern.
    ///
    /// The pattern is used as given; anchor it with `^…$` for full-string
    /// matching.
    pub fn with_pattern(pattern: &str) -> Result<Self, DomainError> {
        let pattern = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// The pattern source this classifier matches against.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns `true` if the trimmed text matches the reference pattern.
    pub fn is_scripture_reference(&self, text: &str) -> bool {
        self.pattern.is_match(text.trim())
    }
}

impl Default for ScriptureReferenceClassifier {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_REFERENCE_PATTERN)
                .expect("default reference pattern is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> bool {
        ScriptureReferenceClassifier::default().is_scripture_reference(text)
    }

    #[test]
    fn test_single_verse() {
        assert!(classify("John 3:16"));
    }

    #[test]
    fn test_verse_range() {
        assert!(classify("John 3:16-18"));
    }

    #[test]
    fn test_free_text_question() {
        assert!(!classify("what is grace"));
        assert!(!classify("forgiveness"));
    }

    #[test]
    fn test_numbered_book_is_not_matched() {
        assert!(!classify("1 Corinthians 13:4"));
        assert!(!classify("2 Peter 1:20-21"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(classify("  Romans 8:28 \n"));
    }

    #[test]
    fn test_multi_word_book() {
        assert!(classify("Song of Solomon 2:4"));
    }

    #[test]
    fn test_internal_double_spaces_are_kept() {
        // The book-name class accepts any run of spaces, so this still matches
        assert!(classify("John  3:16"));
    }

    #[test]
    fn test_rejects_partial_matches() {
        assert!(!classify("John 3"));
        assert!(!classify("John 3:16 says"));
        assert!(!classify("John 3:16-"));
    }

    #[test]
    fn test_custom_pattern_accepts_numbered_books() {
        let classifier =
            ScriptureReferenceClassifier::with_pattern(r"^(\d )?[A-Za-z ]+\d+:\d+(-\d+)?$")
                .unwrap();
        assert!(classifier.is_scripture_reference("1 Corinthians 13:4"));
        assert!(classifier.is_scripture_reference("John 3:16"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = ScriptureReferenceClassifier::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPattern { .. }));
    }

    #[test]
    fn test_default_pattern_source() {
        assert_eq!(
            ScriptureReferenceClassifier::default().pattern(),
            DEFAULT_REFERENCE_PATTERN
        );
    }
}
