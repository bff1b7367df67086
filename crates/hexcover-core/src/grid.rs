//! Hexagonal grid primitives: point indexing, k-ring expansion, boundaries.
//!
//! Stateless wrappers over the H3 cell hierarchy. All operations are pure and
//! deterministic; the only shared resource is read-only access to the grid's
//! static cell hierarchy.

use h3o::{CellIndex, LatLng, Resolution};

use crate::error::{HexcoverError, Result};
use crate::models::{CellBoundary, CoverageSet, GeoPoint};

/// Validate a caller-supplied resolution into the grid's [0, 15] range.
pub fn resolution(value: i32) -> Result<Resolution> {
    u8::try_from(value)
        .ok()
        .and_then(|v| Resolution::try_from(v).ok())
        .ok_or(HexcoverError::ResolutionOutOfRange { value })
}

/// Validate a caller-supplied ring radius. k = 0 means only the center cell.
pub fn ring_radius(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| HexcoverError::InvalidRingRadius { value })
}

/// Index a geographic point to the cell containing it at the given
/// resolution. Deterministic: the same point and resolution always yield the
/// same cell.
pub fn index_for(point: GeoPoint, resolution: Resolution) -> Result<CellIndex> {
    let latlng = LatLng::new(point.lat, point.lng)
        .map_err(|e| HexcoverError::InvalidCoordinates { reason: e.to_string() })?;
    Ok(latlng.to_cell(resolution))
}

/// All cells within topological distance k of the center, center included.
///
/// Away from the grid's 12 pentagon singularities the result holds exactly
/// 1 + 3k(k+1) cells; near one it may be smaller because fewer than 6
/// neighbors exist at some step.
pub fn k_ring(center: CellIndex, k: u32) -> CoverageSet {
    center.grid_disk::<Vec<_>>(k).into_iter().collect()
}

/// The cell's boundary as a closed ring, wound for GeoJSON exteriors. Six
/// distinct vertices for ordinary cells, five for the pentagonal cells at the
/// grid's singular points.
pub fn boundary_of(cell: CellIndex) -> CellBoundary {
    let vertices = cell.boundary().iter().map(|v| GeoPoint::new(v.lat(), v.lng())).collect();
    CellBoundary::from_vertices(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};

    fn downtown_sf() -> GeoPoint {
        GeoPoint::new(37.7749, -122.4194)
    }

    #[test]
    fn test_resolution_bounds() {
        assert!(resolution(0).is_ok());
        assert!(resolution(9).is_ok());
        assert!(resolution(15).is_ok());
        assert!(resolution(-1).is_err());
        assert!(resolution(16).is_err());
        assert!(resolution(16).unwrap_err().is_validation());
    }

    #[test]
    fn test_ring_radius_rejects_negative() {
        assert_eq!(ring_radius(0).unwrap(), 0);
        assert_eq!(ring_radius(10).unwrap(), 10);
        assert!(ring_radius(-1).is_err());
    }

    #[test]
    fn test_indexing_is_deterministic() {
        let res = resolution(9).unwrap();
        let a = index_for(downtown_sf(), res).unwrap();
        let b = index_for(downtown_sf(), res).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_k_ring_zero_is_center_only() {
        let res = resolution(9).unwrap();
        let center = index_for(downtown_sf(), res).unwrap();
        let ring = k_ring(center, 0);
        assert_eq!(ring.len(), 1);
        assert!(ring.contains(&center));
    }

    #[test]
    fn test_k_ring_counts_away_from_pentagons() {
        let res = resolution(9).unwrap();
        let center = index_for(downtown_sf(), res).unwrap();
        assert_eq!(k_ring(center, 1).len(), 7);
        assert_eq!(k_ring(center, 2).len(), 19);
    }

    #[test]
    fn test_k_ring_growth_is_monotonic() {
        let res = resolution(7).unwrap();
        let center = index_for(downtown_sf(), res).unwrap();
        for k in 0..4 {
            assert!(k_ring(center, k).is_subset(&k_ring(center, k + 1)));
        }
    }

    #[test]
    fn test_boundary_is_closed_hexagon() {
        let res = resolution(9).unwrap();
        let cell = index_for(downtown_sf(), res).unwrap();
        let boundary = boundary_of(cell);
        assert_eq!(boundary.vertex_count(), 6);
        assert_eq!(boundary.points().first(), boundary.points().last());
    }

    #[test]
    fn test_boundary_contains_indexed_point() {
        let point = downtown_sf();
        let res = resolution(9).unwrap();
        let cell = index_for(point, res).unwrap();
        let polygon = boundary_of(cell).to_polygon();
        assert!(polygon.contains(&Point::new(point.lng, point.lat)));
    }
}
