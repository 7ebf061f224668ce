//! Domain layer for sanctuary
//!
//! This crate contains the core types and rules of the ministry hub.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Apologetics aggregation
//!
//! A question is answered by several independent sources. Each source
//! contributes one [`AnswerFragment`]; a failed lookup is kept as a typed
//! [`LookupError`] and only turned into display text at the edge.
//!
//! ## Ministry records
//!
//! Events, prayer requests, tasks, sermons, team members and resources are
//! stored as [`Record<F>`] envelopes around their kind-specific fields.

pub mod apologetics;
pub mod core;
pub mod records;

// Re-export commonly used types
pub use apologetics::{
    ANSWER_SEPARATOR, AggregatedAnswer, AnswerFragment, DEFAULT_REFERENCE_PATTERN, LookupError,
    ScriptureReferenceClassifier, step_bible_link, topical_bible_link,
};
pub use core::{error::DomainError, question::Question};
pub use records::{
    Event, EventFields, PrayerRequest, PrayerRequestFields, PrayerStatus, Record, RecordFields,
    RecordId, RecordKind, Resource, ResourceFields, ResourceKind, Sermon, SermonFields, Task,
    TaskFields, TaskPriority, TaskStatus, TeamMember, TeamMemberFields,
};
