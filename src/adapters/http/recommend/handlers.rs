//! HTTP handlers for the recommendation proxy.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::client_error_response;
use crate::adapters::http::AppState;
use crate::domain::RecommendationRequest;

/// POST /recommend - forward a scoring request to the backend.
///
/// The body is the sparse wire request; the successful backend payload is
/// returned unchanged. Failures come back as `{ "error": ... }` with the
/// backend's status propagated where there is one.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    match state.client.get_recommendations(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "recommendation request failed");
            client_error_response(error)
        }
    }
}
