use serde::Deserialize;

/// Ring query parameters, carried in the query string (GET) or as a JSON
/// body (POST).
#[derive(Debug, Deserialize)]
pub struct RingParams {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_resolution")]
    pub resolution: i32,
    #[serde(default = "default_ring_k")]
    pub ring_k: i64,
}

fn default_resolution() -> i32 {
    9
}

fn default_ring_k() -> i64 {
    1
}

/// Polygon coverage parameters, carried in the query string; the polygon
/// itself arrives in the request body.
#[derive(Debug, Deserialize)]
pub struct PolyfillParams {
    pub resolution: i32,
    /// Only include cells fully inside the polygon.
    #[serde(default)]
    pub interior: bool,
    /// Outward buffer distance in degrees, clamped to [0, 0.05]. Applies
    /// only when `interior` is false.
    #[serde(default)]
    pub buffer: f64,
}
