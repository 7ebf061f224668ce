//! Question value object

use serde::{Deserialize, Serialize};

/// A question posed to the apologetics aggregator (Value Object)
///
/// Stores the caller's text exactly as given; [`Question::trimmed`] is what
/// the aggregator classifies and forwards upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content as supplied
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("What is grace?").unwrap();
        assert_eq!(q.content(), "What is grace?");
    }

    #[test]
    fn test_trimmed_keeps_original() {
        let q = Question::try_new("  John 3:16 \n").unwrap();
        assert_eq!(q.trimmed(), "John 3:16");
        assert_eq!(q.content(), "  John 3:16 \n");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
    }
}
