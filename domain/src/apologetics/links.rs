//! Deep links into static Bible study sites.
//!
//! These are pure URL templates; nothing here performs I/O.

use crate::core::string::encode_uri_component;

const TOPICAL_BIBLE_BASE: &str = "https://www.openbible.info/topics/";
const STEP_BIBLE_BASE: &str = "https://www.stepbible.org/?q=text=";

/// Link to the OpenBible.info topical index for `topic`.
pub fn topical_bible_link(topic: &str) -> String {
    format!("{}{}", TOPICAL_BIBLE_BASE, encode_uri_component(topic))
}

/// Link to a STEP Bible text search for `query`.
pub fn step_bible_link(query: &str) -> String {
    format!("{}{}", STEP_BIBLE_BASE, encode_uri_component(query))
}
