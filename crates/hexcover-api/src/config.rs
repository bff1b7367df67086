use std::env;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("HEXCOVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);

        let cors_origin = env::var("HEXCOVER_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self { port, cors_origin }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
