//! Apologetics aggregation domain.
//!
//! The aggregator answers a free-text question by combining several
//! independent sources. This module holds the pure parts of that pipeline:
//!
//! - [`reference::ScriptureReferenceClassifier`]: decides whether a query is
//!   shaped like `"John 3:16"` and therefore worth a verse lookup
//! - [`fragment::AnswerFragment`]: one source's contribution, typed by origin
//! - [`fragment::AggregatedAnswer`]: the ordered fragment list for one query
//! - [`links`]: deep links into static Bible study sites

pub mod fragment;
pub mod links;
pub mod reference;

pub use fragment::{ANSWER_SEPARATOR, AggregatedAnswer, AnswerFragment, LookupError};
pub use links::{step_bible_link, topical_bible_link};
pub use reference::{DEFAULT_REFERENCE_PATTERN, ScriptureReferenceClassifier};
