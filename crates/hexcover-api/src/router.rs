use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Create the API router with all routes
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Ring queries (GET carries query parameters, POST a JSON body)
        .route("/h3-ring", get(handlers::ring_geojson_get))
        .route("/h3-ring", post(handlers::ring_geojson_post))
        .route("/h3-ring-csv", get(handlers::ring_csv_get))
        .route("/h3-ring-csv", post(handlers::ring_csv_post))

        // Polygon coverage
        .route("/h3-polyfill-csv", post(handlers::polyfill_csv))
}
