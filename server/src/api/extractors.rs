//! Request extractors for API routes

use std::ops::Deref;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// JSON body extractor with a structured rejection.
///
/// Deserializes the JSON body like [`axum::Json`] but reports parse failures
/// in the same `{error, code, message}` shape the rest of the API uses,
/// instead of axum's plain-text default.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T> Deref for ApiJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = JsonParseRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonParseRejection)?;
        Ok(Self(value))
    }
}

/// Rejection carrying the underlying JSON parse failure
pub struct JsonParseRejection(JsonRejection);

impl IntoResponse for JsonParseRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "bad_request",
                "code": "JSON_PARSE_ERROR",
                "message": self.0.body_text()
            })),
        )
            .into_response()
    }
}
