//! Configuration introspection endpoint.
//!
//! Reports whether the scoring backend is configured without echoing the
//! configured values themselves, so nothing sensitive can leak through
//! this route.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;
use crate::config::AppConfig;

/// Sanitized view of the runtime configuration.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    /// Whether a scoring backend base URL is present.
    pub backend_url_configured: bool,
    /// Environment name (development / staging / production).
    pub environment: String,
}

impl DebugInfo {
    /// Builds the introspection view from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            backend_url_configured: config.backend.is_configured(),
            environment: config.server.environment.as_str().to_string(),
        }
    }
}

/// GET /debug - configuration presence introspection.
async fn debug_info(State(state): State<AppState>) -> Json<DebugInfo> {
    Json(state.debug.clone())
}

/// Creates the debug router.
pub fn debug_routes() -> Router<AppState> {
    Router::new().route("/", get(debug_info))
}
