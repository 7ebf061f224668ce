//! Shared `reqwest::Client` construction for outbound adapters.

use std::time::Duration;

/// User-Agent sent with every upstream request.
pub const USER_AGENT: &str = concat!("Sanctuary/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used by the upstream adapters.
///
/// `timeout` bounds the whole request at the transport level. The aggregator
/// applies its own per-lookup deadline on top, so this is only a backstop.
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(5));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
