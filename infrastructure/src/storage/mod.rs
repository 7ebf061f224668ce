//! Record storage adapters
//!
//! The in-memory store backs every collection for the lifetime of the
//! process. [`seed_fixture`] loads a small demo congregation so a fresh
//! server has something to show.

mod memory;
mod seed;

pub use memory::{InMemoryRepository, in_memory_repositories};
pub use seed::seed_fixture;
