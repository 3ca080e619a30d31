//! Event dataset types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// A dataset submitted for filtering: a mapping carrying an `events`
/// sequence. Other top-level keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EventDataset {
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

/// One timestamped, typed record with a mapping of named attributes.
///
/// `time_object` is opaque to the filter apart from its optional `timestamp`
/// key and is passed through to the output verbatim. `attribute` defaults to
/// an empty mapping when absent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EventRecord {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub time_object: JsonValue,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub attribute: Map<String, JsonValue>,
}

/// One attribute constraint: the event's attribute named by `attribute`
/// must hold a value that is a member of `values`.
///
/// Criteria arrive on the wire either as structured filter objects or as raw
/// mappings with `attribute`/`values` keys; both shapes deserialize into
/// this one record, so the predicate never branches on shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FilterCriterion {
    pub attribute: String,
    #[schema(value_type = Vec<Object>)]
    pub values: Vec<JsonValue>,
}

/// Filter criteria for one invocation.
///
/// Defaults: empty `event_types` matches every type, empty `filters` applies
/// no attribute constraints, empty `include_attributes` keeps every
/// attribute. Boundaries are optional ISO 8601 strings; each bound is
/// inclusive and applied independently.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub event_types: Vec<String>,
    pub filters: Vec<FilterCriterion>,
    pub include_attributes: Vec<String>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}

/// A projected output record: `time_object` and `event_type` copied from the
/// source event, `attribute` restricted to the requested subset.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FilteredEvent {
    #[schema(value_type = Object)]
    pub time_object: JsonValue,
    pub event_type: Option<String>,
    #[schema(value_type = Object)]
    pub attribute: Map<String, JsonValue>,
}
