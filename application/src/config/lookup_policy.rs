//! Lookup policy: deadlines for upstream calls.

use std::time::Duration;

/// Default per-lookup deadline.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Controls how long the aggregator waits on each external lookup.
///
/// A lookup that outlives the deadline is reported as
/// [`LookupError::Timeout`](sanctuary_domain::LookupError::Timeout) and
/// rendered like any other upstream failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPolicy {
    /// Maximum time to wait for a single upstream call. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_LOOKUP_TIMEOUT),
        }
    }
}

impl LookupPolicy {
    /// Creates a policy with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    pub fn without_timeout() -> Self {
        Self { timeout: None }
    }
}
