use hexcover_core::models::{CoverPolicy, InputPolygon};
use hexcover_core::{cover, grid, serialize};
use serde_json::Value as JsonValue;

use crate::dto::{CsvAttachment, PolyfillParams};
use crate::error::ApiError;

/// Service for polygon coverage queries
pub struct PolyfillService;

impl PolyfillService {
    /// Compute the covering cell set for the first Polygon feature in the
    /// body and render it as a sorted CSV attachment.
    pub fn csv(params: &PolyfillParams, body: &JsonValue) -> Result<CsvAttachment, ApiError> {
        tracing::info!(
            resolution = params.resolution,
            interior = params.interior,
            buffer = params.buffer,
            "Processing polyfill query"
        );

        let resolution = grid::resolution(params.resolution)?;
        let polygon = InputPolygon::from_feature_collection(body)?;
        let policy = if params.interior {
            CoverPolicy::Interior
        } else {
            CoverPolicy::buffered(params.buffer)
        };

        let cells = cover::cover(&polygon, resolution, policy).map_err(|e| {
            tracing::error!(error = %e, "Polygon coverage failed");
            ApiError::from(e)
        })?;

        Ok(CsvAttachment::new("h3_polyfill.csv", serialize::to_csv(&cells, true)))
    }
}
