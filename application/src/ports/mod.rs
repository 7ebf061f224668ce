//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generative_answer;
pub mod record_repository;
pub mod verse_lookup;
