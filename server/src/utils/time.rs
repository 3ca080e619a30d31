//! Timestamp parsing helpers
//!
//! Event timestamps arrive as ISO 8601-like strings, sometimes with more
//! fractional-second digits than microsecond precision. Parsing truncates to
//! a fixed-length prefix first, then tries the accepted formats in order.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::core::constants::TIMESTAMP_PARSE_LEN;

/// Truncate a timestamp string to the parseable prefix
/// (`YYYY-MM-DDTHH:MM:SS.ffffff`). Excess fractional digits and anything
/// after them are dropped; shorter strings pass through unchanged.
pub fn truncate_precision(ts: &str) -> &str {
    match ts.char_indices().nth(TIMESTAMP_PARSE_LEN) {
        Some((idx, _)) => &ts[..idx],
        None => ts,
    }
}

/// Parse an ISO 8601-like timestamp into a naive UTC datetime.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with offset or `Z` (converted to UTC)
/// - `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds
/// - the space-separated variant of the above
/// - bare dates (`YYYY-MM-DD`, midnight)
///
/// Returns `None` when no form matches.
pub fn parse_timestamp(ts: &str) -> Option<NaiveDateTime> {
    let ts = truncate_precision(ts);
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = ts.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = ts.parse::<NaiveDate>() {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_basic() {
        let dt = parse_timestamp("2024-01-15T10:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_timestamp_microseconds() {
        let dt = parse_timestamp("2019-07-21T13:04:40.340101").unwrap();
        assert_eq!(dt.and_utc().timestamp_subsec_micros(), 340_101);
    }

    #[test]
    fn test_parse_timestamp_excess_precision_truncated() {
        // Nine fractional digits: everything past microseconds is dropped
        let dt = parse_timestamp("2019-07-21T13:04:40.340101999").unwrap();
        assert_eq!(dt.and_utc().timestamp_subsec_micros(), 340_101);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2024-01-15T10:30:00+05:00").unwrap();
        // Converted to UTC: 10:30 at +05:00 is 05:30 UTC
        assert_eq!(dt.hour(), 5);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_timestamp_zulu() {
        let dt = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_timestamp_offset_after_truncation_is_dropped() {
        // Six fractional digits plus an offset: truncation removes the offset,
        // leaving a naive local reading (matches the historical behavior)
        let dt = parse_timestamp("2024-01-15T10:30:00.123456+05:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.and_utc().timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_timestamp_space_separated() {
        let dt = parse_timestamp("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_timestamp_bare_date() {
        let dt = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("invalid-timestamp").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2024-13-45T99:99:99").is_none());
    }

    #[test]
    fn test_truncate_precision_short_passthrough() {
        assert_eq!(truncate_precision("2024-01-15"), "2024-01-15");
        assert_eq!(
            truncate_precision("2024-01-15T10:30:00.123456"),
            "2024-01-15T10:30:00.123456"
        );
    }

    #[test]
    fn test_truncate_precision_long() {
        assert_eq!(
            truncate_precision("2024-01-15T10:30:00.1234567890"),
            "2024-01-15T10:30:00.123456"
        );
    }

    #[test]
    fn test_truncate_precision_multibyte_safe() {
        // Never panics on non-ASCII input, it just produces an unparsable prefix
        let weird = "2024-01-15T10:30:00.12345é789";
        let _ = parse_timestamp(weird);
    }
}
