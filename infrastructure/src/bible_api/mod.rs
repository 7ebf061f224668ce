//! Verse lookup adapter for bible-api.com.
//!
//! Implements [`VerseLookupPort`](sanctuary_application::VerseLookupPort) with
//! a single `GET {base_url}/{reference}` call.

mod client;

pub use client::{BibleApiClient, DEFAULT_BIBLE_API_URL};
