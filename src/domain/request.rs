//! Sparse wire shape of a scoring request.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::preferences::{BudgetLevel, Interest, TripDuration};

/// The JSON body sent to the scoring backend's `/recommend` endpoint.
///
/// Presence and absence of keys is part of the contract: optional fields
/// are skipped entirely when unset, and interests only appear while
/// enabled. The flattened interest map keeps the type system in charge of
/// that rather than convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Preferred average temperature in degrees Celsius.
    pub avg_temp: i32,
    /// The selected trip duration, as a one-element sequence. The backend
    /// accepts several durations; the form picks exactly one.
    pub ideal_durations: Vec<TripDuration>,
    /// Maximum number of destinations to return.
    pub top_n: u32,
    /// Budget tier, omitted when the traveler accepts any budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_level: Option<BudgetLevel>,
    /// Region filter, omitted when unset. Never serialized as an empty
    /// string or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Enabled interests with their raw weights, flattened into top-level
    /// keys (`"culture": 5.0`).
    #[serde(flatten)]
    pub interests: BTreeMap<Interest, f64>,
}
