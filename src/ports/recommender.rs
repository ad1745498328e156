//! Recommendation backend port - boundary to the external scoring service.
//!
//! Implementations forward a normalized request to the backend and classify
//! every possible failure into [`RecommendError`]; no transport-level error
//! type may escape past this boundary.

use async_trait::async_trait;

use crate::domain::{RecommendationRequest, RecommendationResponse};

/// Port for the external destination-scoring service.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Forwards one scoring request and returns the backend's payload
    /// unchanged.
    ///
    /// A single attempt: no retry, no caching. The returned error is
    /// always one of the closed [`RecommendError`] kinds.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError>;
}

/// Failures at the scoring-backend boundary.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// The backend was reachable but rejected or failed the request.
    #[error("backend returned {status}: {body}")]
    Backend {
        /// HTTP status the backend answered with.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The backend could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// No backend base URL is configured.
    #[error("scoring backend is not configured: {0}")]
    Configuration(String),

    /// The backend answered successfully but the body was not a valid
    /// recommendation payload.
    #[error("failed to decode backend response: {0}")]
    Parse(String),
}

impl RecommendError {
    /// Creates a backend rejection error.
    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
