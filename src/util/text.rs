// src/util/text.rs
use chrono::{DateTime, FixedOffset, Local};

/// Case-insensitive substring test.
///
/// # Examples
///
/// ```
/// use granolaview::util::text::contains_ignore_case;
///
/// assert!(contains_ignore_case("Weekly Sync with Sam", "sam"));
/// assert!(!contains_ignore_case("Weekly Sync", "sam"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse an ISO-8601/RFC 3339 timestamp as returned by the API.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp.trim()).ok()
}

/// Render a timestamp as a long local date, e.g. "Thursday, February 1, 2024".
///
/// Unparseable input is returned unchanged.
pub fn format_long_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(instant) => instant
            .with_timezone(&Local)
            .format("%A, %B %-d, %Y")
            .to_string(),
        None => timestamp.to_string(),
    }
}
