//! Polygon-to-cell coverage under the interior and buffered policies.

use geo::{Area, Contains, Polygon};
use h3o::geom::{ContainmentMode, TilerBuilder};
use h3o::Resolution;

use crate::error::{HexcoverError, Result};
use crate::grid;
use crate::models::{CoverPolicy, CoverageSet, InputPolygon};

/// Compute the covering cell set for the polygon at the given resolution.
///
/// Interior never overshoots but may under-cover near the polygon's edge;
/// Buffered may overshoot but, with a non-negative distance, never drops a
/// cell intersecting the original polygon.
pub fn cover(
    polygon: &InputPolygon,
    resolution: Resolution,
    policy: CoverPolicy,
) -> Result<CoverageSet> {
    match policy {
        CoverPolicy::Interior => interior_cover(polygon, resolution),
        CoverPolicy::Buffered { distance } => buffered_cover(polygon, resolution, distance),
    }
}

/// Candidate fill of the exact ring, filtered down to the cells whose full
/// boundary lies inside the input polygon.
fn interior_cover(polygon: &InputPolygon, resolution: Resolution) -> Result<CoverageSet> {
    let exact = polygon.to_polygon();
    let candidates = fill(&exact, resolution)?;
    let candidate_count = candidates.len();

    let kept: CoverageSet = candidates
        .into_iter()
        .filter(|&cell| exact.contains(&grid::boundary_of(cell).to_polygon()))
        .collect();
    tracing::debug!(
        candidates = candidate_count,
        kept = kept.len(),
        "Dropped candidate cells straddling the polygon edge"
    );
    Ok(kept)
}

/// Fill of the ring offset outward by `distance` planar degrees. No
/// containment filtering; a zero distance skips the offset entirely.
fn buffered_cover(
    polygon: &InputPolygon,
    resolution: Resolution,
    distance: f64,
) -> Result<CoverageSet> {
    let exact = polygon.to_polygon();
    if distance <= 0.0 {
        return fill(&exact, resolution);
    }
    let buffered = offset_exterior(&exact, distance)?;
    fill(&buffered, resolution)
}

/// Centroid-mode polygon fill at the requested resolution.
fn fill(polygon: &Polygon, resolution: Resolution) -> Result<CoverageSet> {
    let mut tiler = TilerBuilder::new(resolution)
        .containment_mode(ContainmentMode::ContainsCentroid)
        .build();
    tiler
        .add(polygon.clone())
        .map_err(|e| HexcoverError::Geometry { reason: e.to_string() })?;
    Ok(tiler.into_coverage().collect())
}

/// Offset the polygon outward with round joins and keep the exterior of the
/// largest resulting part. Holes opened by the offset are discarded, as is
/// any smaller disjoint part.
fn offset_exterior(polygon: &Polygon, distance: f64) -> Result<Polygon> {
    let parts = geo_buffer::buffer_polygon_rounded(polygon, distance);
    parts
        .into_iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
        .map(|part| Polygon::new(part.exterior().clone(), Vec::new()))
        .ok_or_else(|| HexcoverError::Geometry {
            reason: "buffering produced no geometry".to_string(),
        })
}
