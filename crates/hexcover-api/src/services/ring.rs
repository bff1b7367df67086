use geojson::FeatureCollection;
use hexcover_core::models::{CoverageSet, GeoPoint, MAX_RING_K};
use hexcover_core::{grid, serialize, HexcoverError};

use crate::dto::{CsvAttachment, RingParams};
use crate::error::ApiError;

/// Service for k-ring neighborhood queries
pub struct RingService;

impl RingService {
    /// Expand the ring around the point and render it as a GeoJSON
    /// FeatureCollection.
    pub fn feature_collection(params: &RingParams) -> Result<FeatureCollection, ApiError> {
        tracing::info!(
            lat = params.lat,
            lng = params.lng,
            resolution = params.resolution,
            ring_k = params.ring_k,
            "Processing ring query"
        );

        let cells = Self::ring_cells(params, None)?;
        Ok(serialize::to_feature_collection(&cells, grid::boundary_of))
    }

    /// Expand the ring and render it as a CSV attachment. Row order follows
    /// set iteration order; the CSV endpoints additionally bound ring_k.
    pub fn csv(params: &RingParams) -> Result<CsvAttachment, ApiError> {
        tracing::info!(
            lat = params.lat,
            lng = params.lng,
            resolution = params.resolution,
            ring_k = params.ring_k,
            "Processing ring CSV query"
        );

        let cells = Self::ring_cells(params, Some(MAX_RING_K))?;
        Ok(CsvAttachment::new("h3_ring.csv", serialize::to_csv(&cells, false)))
    }

    fn ring_cells(params: &RingParams, max_k: Option<u32>) -> Result<CoverageSet, ApiError> {
        let resolution = grid::resolution(params.resolution)?;
        let k = grid::ring_radius(params.ring_k)?;
        if let Some(max) = max_k {
            if k > max {
                return Err(HexcoverError::RingRadiusTooLarge { value: params.ring_k, max }.into());
            }
        }

        let center = grid::index_for(GeoPoint::new(params.lat, params.lng), resolution)?;
        Ok(grid::k_ring(center, k))
    }
}
