//! Dataset filtering endpoint

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::api::extractors::ApiJson;
use crate::api::types::ApiError;
use crate::domain::events::{
    EventDataset, EventQuery, FilterCriterion, FilteredEvent, filter_events,
};

/// Request body for `POST /filter-data`.
///
/// `event_type` carries a list of event types (empty = match all),
/// `filters` a list of attribute criteria, `include_attributes` the
/// projection (empty = keep all attributes). The timestamps bound the
/// accepted range, inclusively.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FilterDataRequest {
    /// The dataset to filter; must contain an `events` key
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub json_data: Option<JsonValue>,
    #[serde(default)]
    pub event_type: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterCriterion>,
    #[serde(default)]
    pub include_attributes: Vec<String>,
    #[serde(default)]
    pub start_timestamp: Option<String>,
    #[serde(default)]
    pub end_timestamp: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterDataResponse {
    pub status: &'static str,
    pub filtered_data: Vec<FilteredEvent>,
}

/// Filter a dataset's events by type, time range, and attribute values
#[utoipa::path(
    post,
    path = "/filter-data",
    tag = "filter",
    request_body = FilterDataRequest,
    responses(
        (status = 200, description = "Filtered events", body = FilterDataResponse),
        (status = 400, description = "Missing json_data/events key or malformed payload"),
        (status = 500, description = "Unparsable start/end timestamp")
    )
)]
pub async fn filter_data(
    ApiJson(req): ApiJson<FilterDataRequest>,
) -> Result<Json<FilterDataResponse>, ApiError> {
    let json_data = req.json_data.ok_or_else(|| {
        ApiError::bad_request(
            "MISSING_JSON_DATA",
            "Invalid JSON format: Missing 'json_data' key",
        )
    })?;

    if json_data.get("events").is_none() {
        return Err(ApiError::bad_request(
            "MISSING_EVENTS",
            "Invalid JSON format: Missing 'events' key",
        ));
    }

    let dataset: EventDataset = serde_json::from_value(json_data).map_err(|e| {
        ApiError::bad_request("INVALID_EVENTS", format!("Invalid 'events' payload: {}", e))
    })?;

    let query = EventQuery {
        event_types: req.event_type,
        filters: req.filters,
        include_attributes: req.include_attributes,
        start_timestamp: req.start_timestamp,
        end_timestamp: req.end_timestamp,
    };

    tracing::debug!(
        events = dataset.events.len(),
        event_types = query.event_types.len(),
        filters = query.filters.len(),
        "Filtering dataset"
    );

    let filtered_data = filter_events(&dataset, &query).map_err(|e| {
        tracing::error!(error = %e, "Event filtering failed");
        ApiError::internal(e.to_string())
    })?;

    Ok(Json(FilterDataResponse {
        status: "success",
        filtered_data,
    }))
}
