//! Query handling module
//!
//! Normalizes user input and turns it into a CQL expression:
//! - surrounding whitespace is trimmed
//! - queries shorter than [`MIN_QUERY_CHARS`] are rejected
//! - the text is escaped before being embedded in a CQL string literal

use crate::error::RelayError;

/// Minimum trimmed query length, counted in characters
pub const MIN_QUERY_CHARS: usize = 3;

/// Content type the search is restricted to
pub const CONTENT_TYPE: &str = "page";

/// Trim and validate a raw query
pub fn normalize(raw: &str) -> Result<&str, RelayError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Err(RelayError::QueryTooShort {
            min: MIN_QUERY_CHARS,
        });
    }
    Ok(trimmed)
}

/// Escape text for use inside a double-quoted CQL string
pub fn escape_cql(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the full-text page search expression
pub fn build_cql(text: &str) -> String {
    format!(
        "text ~ \"{}\" AND type = \"{}\"",
        escape_cql(text),
        CONTENT_TYPE
    )
}
