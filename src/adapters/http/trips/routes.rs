//! HTTP routes for trip endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_trip, list_trips};
use crate::adapters::http::AppState;

/// Creates the trip router.
pub fn trip_routes() -> Router<AppState> {
    Router::new().route("/", get(list_trips).post(create_trip))
}
