//! HTTP handlers for trip endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::client_error_response;
use crate::adapters::http::AppState;
use crate::domain::TripDraft;

use super::dto::{CreateTripRequest, TripResponse};

/// GET /trips - list all saved trips in insertion order.
pub async fn list_trips(State(state): State<AppState>) -> Response {
    match state.client.fetch_trips().await {
        Ok(trips) => {
            let body: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "listing trips failed");
            client_error_response(error)
        }
    }
}

/// POST /trips - save a new trip and return it with its generated id.
pub async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Response {
    match state.client.create_trip(TripDraft::from(request)).await {
        Ok(trip) => (StatusCode::CREATED, Json(TripResponse::from(trip))).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "creating trip failed");
            client_error_response(error)
        }
    }
}
