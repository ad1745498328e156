//! Backend-produced recommendation payloads.
//!
//! These types pass through the gateway unchanged; the core never mutates
//! what the scoring backend returned.

use serde::{Deserialize, Serialize};

/// One ranked destination from the scoring backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub city: String,
    pub country: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Match score in `[0, 1]`.
    pub score: f64,
}

impl Recommendation {
    /// The score as a display percentage with one decimal, e.g. `"87.0%"`.
    pub fn match_percent_label(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

/// Successful response body from the scoring backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
