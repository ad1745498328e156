//! Typed client wrapper over the gateway and the trip repository.
//!
//! [`TravelClient`] is the single seam the presentation layer is allowed
//! to call through. Every operation returns a [`ClientError`] from the
//! closed taxonomy; transport details (headers, raw responses) never leak
//! to callers.

use std::sync::Arc;

use crate::domain::{
    PreferenceError, PreferenceSet, RecommendationRequest, RecommendationResponse, Trip, TripDraft,
};
use crate::ports::{
    RecommendError, RecommendationBackend, TripRepository, TripRepositoryError,
};

/// Uniform error surface of the client wrapper.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A preference field failed validation before normalization.
    #[error(transparent)]
    Validation(#[from] PreferenceError),

    /// The scoring backend rejected or failed the request.
    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    /// The scoring backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The scoring backend is not configured.
    #[error("scoring backend is not configured: {0}")]
    Configuration(String),

    /// The backend answered but the payload could not be decoded.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),

    /// The trip collection failed.
    #[error("trip storage failed: {0}")]
    Repository(String),
}

impl From<RecommendError> for ClientError {
    fn from(error: RecommendError) -> Self {
        match error {
            RecommendError::Backend { status, body } => ClientError::Backend { status, body },
            RecommendError::Network(message) => ClientError::Network(message),
            RecommendError::Configuration(message) => ClientError::Configuration(message),
            RecommendError::Parse(message) => ClientError::InvalidResponse(message),
        }
    }
}

impl From<TripRepositoryError> for ClientError {
    fn from(error: TripRepositoryError) -> Self {
        ClientError::Repository(error.to_string())
    }
}

/// Client wrapper used by the presentation layer.
#[derive(Clone)]
pub struct TravelClient {
    backend: Arc<dyn RecommendationBackend>,
    trips: Arc<dyn TripRepository>,
}

impl TravelClient {
    /// Creates a client over the given port implementations.
    pub fn new(backend: Arc<dyn RecommendationBackend>, trips: Arc<dyn TripRepository>) -> Self {
        Self { backend, trips }
    }

    /// Lists all saved trips in insertion order.
    pub async fn fetch_trips(&self) -> Result<Vec<Trip>, ClientError> {
        Ok(self.trips.list().await?)
    }

    /// Saves a new trip and returns it with its generated id.
    pub async fn create_trip(&self, draft: TripDraft) -> Result<Trip, ClientError> {
        let trip = self.trips.insert(draft).await?;
        tracing::info!(trip_id = %trip.id, name = %trip.name, "trip saved");
        Ok(trip)
    }

    /// Forwards an already-normalized scoring request to the backend.
    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError> {
        Ok(self.backend.recommend(request).await?)
    }

    /// Normalizes a preference set and requests recommendations for it.
    pub async fn recommend_for(
        &self,
        preferences: &PreferenceSet,
    ) -> Result<RecommendationResponse, ClientError> {
        let request = preferences.normalize()?;
        self.get_recommendations(&request).await
    }
}
