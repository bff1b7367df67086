//! Rendering of coverage sets as GeoJSON feature collections or CSV text.

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use h3o::CellIndex;
use serde_json::{Map, Value as JsonValue};

use crate::models::{CellBoundary, CoverageSet};

/// Render a coverage set as a FeatureCollection: one Feature per cell, the
/// cell's closed boundary ring as a Polygon exterior and an `h3_index`
/// property. `boundary` resolves each cell's ring.
pub fn to_feature_collection<F>(cells: &CoverageSet, boundary: F) -> FeatureCollection
where
    F: Fn(CellIndex) -> CellBoundary,
{
    let features = cells
        .iter()
        .map(|&cell| {
            let ring = boundary(cell).ring_positions();
            let mut properties = Map::new();
            properties.insert("h3_index".to_string(), JsonValue::from(cell.to_string()));

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(GeoJsonValue::Polygon(vec![ring]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// Render a coverage set as a CSV cell list: a `h3_index` header and one row
/// per cell. Rows are sorted lexicographically when `ordered`; otherwise they
/// follow set iteration order.
pub fn to_csv(cells: &CoverageSet, ordered: bool) -> String {
    let mut rows: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
    if ordered {
        rows.sort();
    }

    let mut out = String::with_capacity(9 + rows.len() * 17);
    out.push_str("h3_index\n");
    for row in &rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}
