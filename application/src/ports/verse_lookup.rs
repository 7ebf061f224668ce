//! Verse lookup port
//!
//! Defines the interface for fetching the literal text of a Scripture
//! reference from an external verse service.

use async_trait::async_trait;
use sanctuary_domain::LookupError;

/// Source of verse text.
///
/// Implementations must map every failure (transport, decoding, unknown
/// reference) to a [`LookupError`] rather than panicking; an unrecognized
/// reference is [`LookupError::NotFound`].
#[async_trait]
pub trait VerseLookupPort: Send + Sync {
    /// Fetch the text for a reference such as `"John 3:16"`.
    async fn fetch_verse(&self, reference: &str) -> Result<String, LookupError>;
}
