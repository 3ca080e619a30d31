//! Event filtering and attribute projection

use chrono::NaiveDateTime;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::utils::time::parse_timestamp;

use super::types::{EventDataset, EventQuery, EventRecord, FilteredEvent};

/// Raised when a query boundary timestamp cannot be parsed.
///
/// This is the filter's only failure mode. A malformed timestamp on an
/// individual event excludes that event silently; a malformed boundary is a
/// caller-contract violation and aborts the whole call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid start_timestamp format: {0}")]
    InvalidStartTimestamp(String),
    #[error("Invalid end_timestamp format: {0}")]
    InvalidEndTimestamp(String),
}

/// Inclusive time window resolved from the query boundaries
struct TimeWindow {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

/// Filter a dataset's events by type, time range, and attribute criteria,
/// then project each surviving event to the requested attribute subset.
///
/// Output preserves input order; no sorting, no deduplication. The function
/// is pure: identical inputs always produce identical output.
pub fn filter_events(
    dataset: &EventDataset,
    query: &EventQuery,
) -> Result<Vec<FilteredEvent>, FilterError> {
    let window = TimeWindow {
        start: parse_boundary(query.start_timestamp.as_deref())
            .map_err(FilterError::InvalidStartTimestamp)?,
        end: parse_boundary(query.end_timestamp.as_deref())
            .map_err(FilterError::InvalidEndTimestamp)?,
    };

    Ok(dataset
        .events
        .iter()
        .filter(|event| event_matches(event, query, &window))
        .map(|event| project(event, &query.include_attributes))
        .collect())
}

fn parse_boundary(raw: Option<&str>) -> Result<Option<NaiveDateTime>, String> {
    match raw {
        Some(s) => parse_timestamp(s).map(Some).ok_or_else(|| s.to_string()),
        None => Ok(None),
    }
}

/// Check whether one event passes every filter criterion
fn event_matches(event: &EventRecord, query: &EventQuery, window: &TimeWindow) -> bool {
    matches_type(event, &query.event_types)
        && matches_window(event, window)
        && matches_attributes(event, query)
}

/// Empty `event_types` matches every type; otherwise membership is required
fn matches_type(event: &EventRecord, event_types: &[String]) -> bool {
    if event_types.is_empty() {
        return true;
    }
    match &event.event_type {
        Some(t) => event_types.iter().any(|wanted| wanted == t),
        None => false,
    }
}

/// Events without a usable timestamp skip range filtering entirely; events
/// with an unparsable timestamp are excluded.
fn matches_window(event: &EventRecord, window: &TimeWindow) -> bool {
    let raw = match event.time_object.get("timestamp") {
        None | Some(JsonValue::Null) => return true,
        Some(JsonValue::String(s)) if s.is_empty() => return true,
        Some(JsonValue::String(s)) => s,
        // A timestamp that is not a string cannot be parsed
        Some(_) => return false,
    };

    match parse_timestamp(raw) {
        Some(ts) => {
            if window.start.is_some_and(|start| ts < start) {
                return false;
            }
            if window.end.is_some_and(|end| ts > end) {
                return false;
            }
            true
        }
        None => false,
    }
}

/// Every criterion must find its attribute with a value in the allowed set
fn matches_attributes(event: &EventRecord, query: &EventQuery) -> bool {
    query.filters.iter().all(|criterion| {
        event
            .attribute
            .get(&criterion.attribute)
            .is_some_and(|value| criterion.values.contains(value))
    })
}

/// Build the projected output record. Iterates the event's own attribute
/// keys, so requested-but-absent attributes are omitted rather than
/// appearing as null.
fn project(event: &EventRecord, include_attributes: &[String]) -> FilteredEvent {
    let attribute: Map<String, JsonValue> = if include_attributes.is_empty() {
        event.attribute.clone()
    } else {
        event
            .attribute
            .iter()
            .filter(|(key, _)| include_attributes.iter().any(|inc| inc == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    FilteredEvent {
        time_object: event.time_object.clone(),
        event_type: event.event_type.clone(),
        attribute,
    }
}
