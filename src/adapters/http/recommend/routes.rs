//! HTTP routes for the recommendation proxy.

use axum::{routing::post, Router};

use super::handlers::get_recommendations;
use crate::adapters::http::AppState;

/// Creates the recommendation router.
pub fn recommend_routes() -> Router<AppState> {
    Router::new().route("/", post(get_recommendations))
}
