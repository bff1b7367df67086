use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "hexcover-api" }
    }
}

/// A CSV payload served as a file attachment with a fixed filename.
#[derive(Debug)]
pub struct CsvAttachment {
    filename: &'static str,
    body: String,
}

impl CsvAttachment {
    pub fn new(filename: &'static str, body: String) -> Self {
        Self { filename, body }
    }
}

impl IntoResponse for CsvAttachment {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename={}", self.filename);
        (
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}
