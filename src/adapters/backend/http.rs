//! HTTP gateway to the external scoring backend.
//!
//! Posts normalized requests to `{base_url}/recommend` and translates
//! every transport or HTTP failure into a [`RecommendError`]. Successful
//! payloads pass through unchanged. Single attempt per call: no retry,
//! no caching.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BackendConfig;
use crate::domain::{RecommendationRequest, RecommendationResponse};
use crate::ports::{RecommendError, RecommendationBackend};

/// Gateway to the scoring backend over HTTP.
pub struct HttpRecommendationBackend {
    base_url: Option<String>,
    client: Client,
}

impl HttpRecommendationBackend {
    /// Creates a gateway from backend configuration.
    ///
    /// A missing base URL is allowed here; the gateway reports it as a
    /// configuration error at call time instead of failing startup.
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.clone(),
            client,
        }
    }

    /// Builds the scoring endpoint URL, stripping a trailing slash off the
    /// configured base first.
    fn recommend_url(&self) -> Result<String, RecommendError> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            RecommendError::configuration("no base URL set; /recommend is unavailable")
        })?;
        Ok(format!("{}/recommend", base.trim_end_matches('/')))
    }
}

#[async_trait]
impl RecommendationBackend for HttpRecommendationBackend {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        let url = self.recommend_url()?;
        tracing::debug!(%url, "forwarding scoring request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "scoring backend rejected request");
            return Err(RecommendError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response
            .json::<RecommendationResponse>()
            .await
            .map_err(|e| RecommendError::Parse(e.to_string()))?;

        tracing::debug!(
            count = payload.recommendations.len(),
            "scoring backend responded"
        );
        Ok(payload)
    }
}

/// Maps a transport failure into the closed error taxonomy without letting
/// the raw reqwest error escape.
fn classify_transport_error(error: reqwest::Error) -> RecommendError {
    if error.is_timeout() {
        RecommendError::network("request to the scoring backend timed out")
    } else if error.is_connect() {
        RecommendError::network("could not connect to the scoring backend")
    } else {
        RecommendError::network(format!("scoring backend request failed: {error}"))
    }
}
