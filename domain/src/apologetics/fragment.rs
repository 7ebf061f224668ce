//! Answer fragments and the aggregated answer.
//!
//! Each upstream source contributes exactly one [`AnswerFragment`]. Lookups
//! keep their failure as a typed [`LookupError`]; the display text (including
//! the fixed failure sentences shown to end users) is produced only by
//! [`AnswerFragment::render`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Separator placed between rendered fragments in the display text.
pub const ANSWER_SEPARATOR: &str = "\n\n---\n\n";

const GENERATION_FAILED: &str = "AI: Error generating apologetics answer.";
const NO_ANSWER_GENERATED: &str = "No answer generated.";
const VERSE_FAILED: &str = "Bible-API: Error fetching verse.";

/// Why an upstream lookup produced no usable content.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LookupError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("No verse found for \"{reference}\"")]
    NotFound { reference: String },

    #[error("Response contained no generated text")]
    EmptyGeneration,
}

impl LookupError {
    /// Check if this error came from the lookup deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout(_))
    }
}

/// One source's contribution to an aggregated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AnswerFragment {
    /// Text from the generative inference endpoint
    Generated { outcome: Result<String, LookupError> },
    /// Verse text for a reference-shaped query
    Verse {
        reference: String,
        outcome: Result<String, LookupError>,
    },
    /// Topical Bible deep link
    TopicalLink { url: String },
    /// STEP Bible deep link
    StepBibleLink { url: String },
}

impl AnswerFragment {
    pub fn generated(outcome: Result<String, LookupError>) -> Self {
        AnswerFragment::Generated { outcome }
    }

    pub fn verse(reference: impl Into<String>, outcome: Result<String, LookupError>) -> Self {
        AnswerFragment::Verse {
            reference: reference.into(),
            outcome,
        }
    }

    /// Flatten to the display string shown to end users.
    pub fn render(&self) -> String {
        match self {
            AnswerFragment::Generated { outcome: Ok(text) } => text.clone(),
            AnswerFragment::Generated {
                outcome: Err(LookupError::EmptyGeneration),
            } => NO_ANSWER_GENERATED.to_string(),
            AnswerFragment::Generated { outcome: Err(_) } => GENERATION_FAILED.to_string(),
            AnswerFragment::Verse {
                reference,
                outcome: Ok(text),
            } => format!("Bible-API ({}):\n{}", reference, text),
            AnswerFragment::Verse {
                outcome: Err(LookupError::NotFound { reference }),
                ..
            } => format!("Bible-API: Verse not found for \"{}\".", reference),
            AnswerFragment::Verse { outcome: Err(_), .. } => VERSE_FAILED.to_string(),
            AnswerFragment::TopicalLink { url } => format!("Topical Bible: {}", url),
            AnswerFragment::StepBibleLink { url } => format!("STEP Bible: {}", url),
        }
    }

    /// The lookup error behind this fragment, if any.
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            AnswerFragment::Generated { outcome: Err(e) }
            | AnswerFragment::Verse { outcome: Err(e), .. } => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if this fragment stands in for a failed lookup.
    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }
}

/// All fragments produced for one query, in display order:
/// generated answer, verse (reference-shaped queries only), topical link,
/// STEP Bible link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedAnswer {
    pub query: String,
    pub fragments: Vec<AnswerFragment>,
}

impl AggregatedAnswer {
    pub fn new(query: impl Into<String>, fragments: Vec<AnswerFragment>) -> Self {
        Self {
            query: query.into(),
            fragments,
        }
    }

    /// Every fragment rendered, in order, including failure sentences.
    pub fn rendered(&self) -> Vec<String> {
        self.fragments.iter().map(AnswerFragment::render).collect()
    }

    /// Non-empty rendered fragments joined with [`ANSWER_SEPARATOR`].
    pub fn display_text(&self) -> String {
        self.rendered()
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(ANSWER_SEPARATOR)
    }

    /// Number of fragments standing in for failed lookups.
    pub fn failure_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_failure()).count()
    }
}
