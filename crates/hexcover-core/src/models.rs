//! Canonical domain types for coverage queries.
//!
//! These types bridge GeoJSON-style coordinate arrays and the computational
//! `geo` crate types consumed by the grid and coverage modules.

use std::collections::HashSet;

use geo::algorithm::orient::{Direction, Orient};
use geo::{LineString, Polygon};
use h3o::CellIndex;

use crate::error::{HexcoverError, Result};

/// Upper bound for the planar buffer distance, in coordinate degrees.
pub const MAX_BUFFER_DEGREES: f64 = 0.05;

/// Upper bound for ring_k on the CSV ring endpoints.
pub const MAX_RING_K: u32 = 10;

/// A geographic point in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The set of cells covering a queried region. Uniqueness is guaranteed;
/// iteration order is not, and ordering is imposed only at serialization.
pub type CoverageSet = HashSet<CellIndex>;

/// A cell's boundary as a closed ring of vertices (first vertex repeated
/// last), wound counter-clockwise as required for GeoJSON polygon exteriors.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBoundary {
    ring: Vec<GeoPoint>,
}

impl CellBoundary {
    /// Close an open vertex list into a ring.
    pub(crate) fn from_vertices(mut vertices: Vec<GeoPoint>) -> Self {
        if let Some(&first) = vertices.first() {
            if vertices.last() != Some(&first) {
                vertices.push(first);
            }
        }
        Self { ring: vertices }
    }

    /// Number of distinct vertices: 6 for hexagonal cells, 5 for pentagons.
    pub fn vertex_count(&self) -> usize {
        self.ring.len().saturating_sub(1)
    }

    /// The closed ring, first vertex repeated last.
    pub fn points(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// The closed ring as GeoJSON positions ([lng, lat] order).
    pub fn ring_positions(&self) -> Vec<Vec<f64>> {
        self.ring.iter().map(|p| vec![p.lng, p.lat]).collect()
    }

    /// The boundary as a `geo` polygon (x = lng, y = lat).
    pub fn to_polygon(&self) -> Polygon {
        ring_to_polygon(&self.ring)
    }
}

/// A single exterior ring supplied by the caller. Open and closed input
/// rings are both accepted and normalized to closed; holes are not modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPolygon {
    ring: Vec<GeoPoint>,
}

impl InputPolygon {
    /// Validate and close an exterior ring.
    pub fn new(mut points: Vec<GeoPoint>) -> Result<Self> {
        if let Some(bad) = points.iter().find(|p| !p.lat.is_finite() || !p.lng.is_finite()) {
            return Err(HexcoverError::MalformedPolygon {
                reason: format!("coordinates must be finite, got ({}, {})", bad.lng, bad.lat),
            });
        }

        let closed = points.len() > 1 && points.first() == points.last();
        let distinct = if closed { points.len() - 1 } else { points.len() };
        if distinct < 3 {
            return Err(HexcoverError::MalformedPolygon {
                reason: format!("polygon ring must have at least 3 vertices, got {}", distinct),
            });
        }

        if !closed {
            let first = points[0];
            points.push(first);
        }
        Ok(Self { ring: points })
    }

    /// Extract the exterior ring of the first feature in a GeoJSON-like
    /// feature collection. Only the first feature is consulted and its
    /// geometry must be a Polygon.
    pub fn from_feature_collection(value: &serde_json::Value) -> Result<Self> {
        let features = value
            .get("features")
            .and_then(serde_json::Value::as_array)
            .filter(|features| !features.is_empty())
            .ok_or(HexcoverError::EmptyFeatureCollection)?;

        let geometry = features[0]
            .get("geometry")
            .filter(|geometry| !geometry.is_null())
            .ok_or_else(|| HexcoverError::MalformedPolygon {
                reason: "first feature has no geometry".to_string(),
            })?;

        let geometry_type = geometry.get("type").and_then(serde_json::Value::as_str).ok_or_else(
            || HexcoverError::MalformedPolygon { reason: "geometry has no type".to_string() },
        )?;
        if geometry_type != "Polygon" {
            return Err(HexcoverError::UnsupportedGeometry);
        }

        let rings = geometry
            .get("coordinates")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| HexcoverError::MalformedPolygon {
                reason: "geometry has no coordinate array".to_string(),
            })?;
        let exterior = rings.first().and_then(serde_json::Value::as_array).ok_or_else(|| {
            HexcoverError::MalformedPolygon { reason: "polygon has no exterior ring".to_string() }
        })?;

        let points = exterior
            .iter()
            .enumerate()
            .map(|(i, position)| {
                let pair = position.as_array().filter(|p| p.len() >= 2);
                let lng = pair.and_then(|p| p[0].as_f64());
                let lat = pair.and_then(|p| p[1].as_f64());
                match (lat, lng) {
                    (Some(lat), Some(lng)) => Ok(GeoPoint::new(lat, lng)),
                    _ => Err(HexcoverError::MalformedPolygon {
                        reason: format!("position {} is not a [lng, lat] pair", i),
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(points)
    }

    /// The closed exterior ring.
    pub fn exterior(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// The ring as a `geo` polygon (x = lng, y = lat).
    pub fn to_polygon(&self) -> Polygon {
        ring_to_polygon(&self.ring)
    }
}

// Offsetting and fill expect counter-clockwise exteriors; caller winding is
// not part of the input contract, so normalize here.
fn ring_to_polygon(ring: &[GeoPoint]) -> Polygon {
    let coords: Vec<(f64, f64)> = ring.iter().map(|p| (p.lng, p.lat)).collect();
    Polygon::new(LineString::from(coords), Vec::new()).orient(Direction::Default)
}

/// Coverage policy selected by the caller.
///
/// Interior keeps only cells fully contained in the source polygon (no false
/// positives, possible false negatives at edges). Buffered fills an
/// outward-offset version of the polygon and never drops a cell intersecting
/// the original (possible false positives).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoverPolicy {
    Interior,
    Buffered { distance: f64 },
}

impl CoverPolicy {
    /// Buffered policy with the distance silently clamped into
    /// [0, MAX_BUFFER_DEGREES].
    pub fn buffered(distance: f64) -> Self {
        Self::Buffered { distance: distance.clamp(0.0, MAX_BUFFER_DEGREES) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ring() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_open_ring_is_closed() {
        let polygon = InputPolygon::new(square_ring()).unwrap();
        let ring = polygon.exterior();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_closed_ring_is_accepted_unchanged() {
        let mut points = square_ring();
        points.push(points[0]);
        let polygon = InputPolygon::new(points).unwrap();
        assert_eq!(polygon.exterior().len(), 5);
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        let err = InputPolygon::new(points).unwrap_err();
        assert!(matches!(err, HexcoverError::MalformedPolygon { .. }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let mut points = square_ring();
        points[1].lat = f64::NAN;
        assert!(InputPolygon::new(points).is_err());
    }

    #[test]
    fn test_feature_collection_extraction() {
        let body = serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                },
                "properties": {}
            }]
        });
        let polygon = InputPolygon::from_feature_collection(&body).unwrap();
        assert_eq!(polygon.exterior().len(), 5);
        assert_eq!(polygon.exterior()[1], GeoPoint::new(0.0, 1.0));
    }

    #[test]
    fn test_empty_feature_collection_rejected() {
        let body = serde_json::json!({ "type": "FeatureCollection", "features": [] });
        let err = InputPolygon::from_feature_collection(&body).unwrap_err();
        assert!(matches!(err, HexcoverError::EmptyFeatureCollection));
        assert_eq!(err.to_string(), "at least one feature required");
    }

    #[test]
    fn test_missing_features_key_rejected() {
        let body = serde_json::json!({ "type": "FeatureCollection" });
        let err = InputPolygon::from_feature_collection(&body).unwrap_err();
        assert!(matches!(err, HexcoverError::EmptyFeatureCollection));
    }

    #[test]
    fn test_non_polygon_geometry_rejected() {
        let body = serde_json::json!({
            "features": [{
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            }]
        });
        let err = InputPolygon::from_feature_collection(&body).unwrap_err();
        assert!(matches!(err, HexcoverError::UnsupportedGeometry));
        assert_eq!(err.to_string(), "only Polygon geometry is supported");
    }

    #[test]
    fn test_malformed_positions_rejected() {
        let body = serde_json::json!({
            "features": [{
                "geometry": { "type": "Polygon", "coordinates": [[[0.0], [1.0, 1.0], [2.0, 0.0]]] }
            }]
        });
        let err = InputPolygon::from_feature_collection(&body).unwrap_err();
        assert!(matches!(err, HexcoverError::MalformedPolygon { .. }));
    }

    #[test]
    fn test_clockwise_ring_is_reoriented() {
        use geo::algorithm::winding_order::Winding;

        let mut points = square_ring();
        points.reverse();
        let polygon = InputPolygon::new(points).unwrap();
        assert!(polygon.to_polygon().exterior().is_ccw());
    }

    #[test]
    fn test_buffer_distance_clamped() {
        assert_eq!(CoverPolicy::buffered(0.01), CoverPolicy::Buffered { distance: 0.01 });
        assert_eq!(CoverPolicy::buffered(5.0), CoverPolicy::Buffered { distance: 0.05 });
        assert_eq!(CoverPolicy::buffered(-1.0), CoverPolicy::Buffered { distance: 0.0 });
    }

    #[test]
    fn test_cell_boundary_closes_ring() {
        let boundary = CellBoundary::from_vertices(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ]);
        assert_eq!(boundary.vertex_count(), 3);
        assert_eq!(boundary.points().first(), boundary.points().last());
        assert_eq!(boundary.ring_positions().len(), 4);
    }
}
