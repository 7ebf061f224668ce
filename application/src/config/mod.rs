//! Application-level configuration.
//!
//! - [`LookupPolicy`]: deadlines for the aggregator's upstream lookups

pub mod lookup_policy;

pub use lookup_policy::{DEFAULT_LOOKUP_TIMEOUT, LookupPolicy};
