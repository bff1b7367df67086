use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use geojson::FeatureCollection;

use crate::dto::{CsvAttachment, RingParams};
use crate::error::ApiError;
use crate::services::RingService;

pub async fn ring_geojson_get(
    params: Result<Query<RingParams>, QueryRejection>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let Query(params) = params.map_err(bad_ring_params)?;
    Ok(Json(RingService::feature_collection(&params)?))
}

pub async fn ring_geojson_post(
    body: Result<Json<RingParams>, JsonRejection>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let Json(params) = body.map_err(bad_ring_params)?;
    Ok(Json(RingService::feature_collection(&params)?))
}

pub async fn ring_csv_get(
    params: Result<Query<RingParams>, QueryRejection>,
) -> Result<CsvAttachment, ApiError> {
    let Query(params) = params.map_err(bad_ring_params)?;
    RingService::csv(&params)
}

pub async fn ring_csv_post(
    body: Result<Json<RingParams>, JsonRejection>,
) -> Result<CsvAttachment, ApiError> {
    let Json(params) = body.map_err(bad_ring_params)?;
    RingService::csv(&params)
}

fn bad_ring_params(rejection: impl std::fmt::Display) -> ApiError {
    ApiError::bad_request("missing or invalid parameters: 'lat' and 'lng' must be numbers")
        .with_details(rejection.to_string())
}
