//! HTTP surface exposed to the presentation layer.
//!
//! Route groups follow the handler/route module split: `/trips`,
//! `/recommend`, and `/debug`, plus a `/health` probe. All groups share
//! one [`AppState`] carrying the client wrapper.

pub mod debug;
mod error;
pub mod recommend;
pub mod trips;

pub use debug::DebugInfo;
pub use error::ErrorResponse;

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::TravelClient;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The seam into the gateway and the trip repository.
    pub client: TravelClient,
    /// Sanitized configuration introspection served by `/debug`.
    pub debug: DebugInfo,
}

impl AppState {
    /// Creates the handler state.
    pub fn new(client: TravelClient, debug: DebugInfo) -> Self {
        Self { client, debug }
    }
}

/// Builds the full API router.
///
/// CORS is permissive because the browser-side form is served from a
/// different origin.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/trips", trips::trip_routes())
        .nest("/recommend", recommend::recommend_routes())
        .nest("/debug", debug::debug_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
