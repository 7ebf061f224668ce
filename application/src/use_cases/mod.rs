//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_answer;
pub mod manage_records;
pub mod ministry_overview;
