//! Scoring backend adapters.

mod http;
mod mock;

pub use http::HttpRecommendationBackend;
pub use mock::{MockFailure, MockRecommendationBackend};
