use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use serde_json::Value as JsonValue;

use crate::dto::{CsvAttachment, PolyfillParams};
use crate::error::ApiError;
use crate::services::PolyfillService;

pub async fn polyfill_csv(
    params: Result<Query<PolyfillParams>, QueryRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<CsvAttachment, ApiError> {
    let Query(params) = params.map_err(|e| {
        ApiError::bad_request("missing or invalid parameters: 'resolution' is required")
            .with_details(e.to_string())
    })?;
    let Json(body) = body.map_err(|e| {
        ApiError::bad_request("request body must be a GeoJSON feature collection")
            .with_details(e.to_string())
    })?;

    PolyfillService::csv(&params, &body)
}
