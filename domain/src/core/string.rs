//! String utilities for the domain layer.

use url::form_urlencoded;

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Percent-encode a string for use as a single URI component.
///
/// Mirrors `encodeURIComponent`: ASCII letters, digits and `-_.!~*'()` pass
/// through, everything else (including spaces and `/`) is escaped as UTF-8
/// `%XX` sequences.
pub fn encode_uri_component(s: &str) -> String {
    // form_urlencoded leaves `*-._` alone and turns spaces into `+`; a literal
    // `+` is always escaped to %2B, so rewriting `+` afterwards is lossless.
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%7E", "~")
}
