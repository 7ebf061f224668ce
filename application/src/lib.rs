//! Application layer for sanctuary
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LOOKUP_TIMEOUT, LookupPolicy};
pub use ports::{
    generative_answer::GenerativeAnswerPort,
    record_repository::{MinistryRepositories, RecordRepository, RepositoryFor, StorageError},
    verse_lookup::VerseLookupPort,
};
pub use use_cases::aggregate_answer::AggregateAnswerUseCase;
pub use use_cases::manage_records::{ManageRecordsUseCase, RecordError};
pub use use_cases::ministry_overview::{
    KindCount, MinistryOverview, MinistryOverviewUseCase, UPCOMING_EVENT_LIMIT,
};
