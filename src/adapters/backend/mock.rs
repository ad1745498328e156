//! Scriptable scoring backend for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{Recommendation, RecommendationRequest, RecommendationResponse};
use crate::ports::{RecommendError, RecommendationBackend};

/// Failure a [`MockRecommendationBackend`] can be told to produce.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Pretend the backend answered with this status and body.
    Backend { status: u16, body: String },
    /// Pretend the backend was unreachable.
    Network(String),
}

/// In-memory stand-in for the scoring backend.
///
/// Returns a canned recommendation list until a failure is injected with
/// [`fail_with`](Self::fail_with); also counts calls so tests can assert
/// the single-attempt contract.
#[derive(Default)]
pub struct MockRecommendationBackend {
    recommendations: Mutex<Vec<Recommendation>>,
    failure: Mutex<Option<MockFailure>>,
    calls: AtomicUsize,
}

impl MockRecommendationBackend {
    /// A mock that answers every request with an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that answers every request with the given destinations.
    pub fn with_recommendations(recommendations: Vec<Recommendation>) -> Self {
        Self {
            recommendations: Mutex::new(recommendations),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with the given failure.
    pub fn fail_with(&self, failure: MockFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Clears an injected failure.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of `recommend` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationBackend for MockRecommendationBackend {
    async fn recommend(
        &self,
        _request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(match failure {
                MockFailure::Backend { status, body } => RecommendError::Backend { status, body },
                MockFailure::Network(message) => RecommendError::Network(message),
            });
        }

        Ok(RecommendationResponse {
            recommendations: self.recommendations.lock().unwrap().clone(),
        })
    }
}
