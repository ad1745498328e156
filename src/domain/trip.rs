//! Saved trips.
//!
//! A trip is a user-saved destination record, independent of the
//! recommendation flow. Trips live for the lifetime of the process; there
//! is no durable store behind them yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::preferences::{BudgetLevel, Interest, TripDuration};

/// Unique identifier for a saved trip.
///
/// Random UUIDs keep rapid sequential inserts collision-free, which a
/// wall-clock-derived id would not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(Uuid);

impl TripId {
    /// Creates a new random TripId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TripId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A saved trip with its generated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_level: Option<BudgetLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_temp: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ideal_durations: Vec<TripDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    pub created_at: DateTime<Utc>,
    /// Interest weights carried over from the preference form, flattened
    /// into top-level keys.
    #[serde(flatten)]
    pub interests: BTreeMap<Interest, f64>,
}

/// Trip fields as submitted by the caller, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub name: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_level: Option<BudgetLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_temp: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ideal_durations: Vec<TripDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    #[serde(flatten)]
    pub interests: BTreeMap<Interest, f64>,
}

impl TripDraft {
    /// A draft with just a name and destination.
    pub fn new(name: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }
}

impl Trip {
    /// Materializes a draft into a trip with a fresh id.
    pub fn from_draft(draft: TripDraft) -> Self {
        Self {
            id: TripId::new(),
            name: draft.name,
            destination: draft.destination,
            budget_level: draft.budget_level,
            region: draft.region,
            avg_temp: draft.avg_temp,
            ideal_durations: draft.ideal_durations,
            top_n: draft.top_n,
            created_at: Utc::now(),
            interests: draft.interests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drafts_with_identical_fields_get_distinct_ids() {
        let draft = TripDraft::new("Beach Trip", "Maldives");
        let first = Trip::from_draft(draft.clone());
        let second = Trip::from_draft(draft);

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn draft_deserializes_with_flattened_interests() {
        let draft: TripDraft = serde_json::from_value(json!({
            "name": "European Culture Tour",
            "destination": "Paris, France",
            "budget_level": "Mid-range",
            "region": "Europe",
            "culture": 5.0,
            "adventure": 2.0,
        }))
        .unwrap();

        assert_eq!(draft.budget_level, Some(BudgetLevel::MidRange));
        assert_eq!(draft.interests.get(&Interest::Culture), Some(&5.0));
        assert_eq!(draft.interests.get(&Interest::Adventure), Some(&2.0));
    }

    #[test]
    fn unset_fields_are_omitted_from_serialized_trips() {
        let trip = Trip::from_draft(TripDraft::new("Weekend Escape", "Lisbon, Portugal"));
        let value = serde_json::to_value(&trip).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("id"));
        assert!(object.contains_key("created_at"));
        assert!(!object.contains_key("budget_level"));
        assert!(!object.contains_key("region"));
        assert!(!object.contains_key("ideal_durations"));
    }

    #[test]
    fn trip_id_round_trips_through_display() {
        let id = TripId::new();
        let parsed: TripId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
