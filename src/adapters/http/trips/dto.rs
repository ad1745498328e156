//! HTTP DTOs for trip endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{BudgetLevel, Interest, Trip, TripDraft, TripDuration};

/// Request body for saving a trip: a trip minus its id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
    pub destination: String,
    #[serde(default)]
    pub budget_level: Option<BudgetLevel>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub avg_temp: Option<i32>,
    #[serde(default)]
    pub ideal_durations: Vec<TripDuration>,
    #[serde(default)]
    pub top_n: Option<u32>,
    #[serde(flatten)]
    pub interests: BTreeMap<Interest, f64>,
}

impl From<CreateTripRequest> for TripDraft {
    fn from(request: CreateTripRequest) -> Self {
        Self {
            name: request.name,
            destination: request.destination,
            budget_level: request.budget_level,
            region: request.region,
            avg_temp: request.avg_temp,
            ideal_durations: request.ideal_durations,
            top_n: request.top_n,
            interests: request.interests,
        }
    }
}

/// A saved trip as returned over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub name: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_level: Option<BudgetLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_temp: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ideal_durations: Vec<TripDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    pub created_at: String,
    #[serde(flatten)]
    pub interests: BTreeMap<Interest, f64>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            name: trip.name,
            destination: trip.destination,
            budget_level: trip.budget_level,
            region: trip.region,
            avg_temp: trip.avg_temp,
            ideal_durations: trip.ideal_durations,
            top_n: trip.top_n,
            created_at: trip.created_at.to_rfc3339(),
            interests: trip.interests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_carries_flattened_interests_into_the_draft() {
        let request: CreateTripRequest = serde_json::from_value(json!({
            "name": "Beach Paradise",
            "destination": "Maldives",
            "budget_level": "Luxury",
            "beaches": 5.0,
            "seclusion": 5.0,
        }))
        .unwrap();

        let draft = TripDraft::from(request);
        assert_eq!(draft.budget_level, Some(BudgetLevel::Luxury));
        assert_eq!(draft.interests.get(&Interest::Beaches), Some(&5.0));
        assert_eq!(draft.interests.get(&Interest::Seclusion), Some(&5.0));
    }

    #[test]
    fn trip_response_serializes_its_id_as_a_string() {
        let trip = Trip::from_draft(TripDraft::new("Beach Trip", "Maldives"));
        let expected_id = trip.id.to_string();

        let response = TripResponse::from(trip);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], json!(expected_id));
        assert!(value.get("budget_level").is_none());
    }
}
