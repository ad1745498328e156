//! Traveler preference model and request normalization.
//!
//! A [`PreferenceSet`] holds what the preference form collects: up to nine
//! optional weighted interests plus budget, region, temperature, and
//! duration. [`PreferenceSet::normalize`] turns it into the sparse wire
//! request sent to the scoring backend. Disabled interests and the "any"
//! region sentinel are omitted from the wire entirely; absence is
//! semantically distinct from a zero weight.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::request::RecommendationRequest;

/// Lowest accepted average temperature, in degrees Celsius.
pub const MIN_AVG_TEMP: i32 = 0;
/// Highest accepted average temperature, in degrees Celsius.
pub const MAX_AVG_TEMP: i32 = 40;
/// Lowest weight an enabled interest may carry.
pub const MIN_INTEREST_WEIGHT: f64 = 1.0;
/// Highest weight an enabled interest may carry.
pub const MAX_INTEREST_WEIGHT: f64 = 5.0;
/// Result count requested when the caller does not choose one.
pub const DEFAULT_TOP_N: u32 = 6;

/// Region value that means "no region filter".
///
/// The form offers it as a real option, so it has to be normalized to field
/// omission rather than sent over the wire.
pub const ANY_REGION: &str = "any";

/// One weighted category of travel experience.
///
/// The set is closed; each variant doubles as a wire key in the scoring
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Culture,
    Adventure,
    Nature,
    Beaches,
    Nightlife,
    Cuisine,
    Wellness,
    Urban,
    Seclusion,
}

impl Interest {
    /// All interests, in wire-key order.
    pub const ALL: [Interest; 9] = [
        Interest::Culture,
        Interest::Adventure,
        Interest::Nature,
        Interest::Beaches,
        Interest::Nightlife,
        Interest::Cuisine,
        Interest::Wellness,
        Interest::Urban,
        Interest::Seclusion,
    ];

    /// The key this interest uses in the outbound request.
    pub fn key(&self) -> &'static str {
        match self {
            Interest::Culture => "culture",
            Interest::Adventure => "adventure",
            Interest::Nature => "nature",
            Interest::Beaches => "beaches",
            Interest::Nightlife => "nightlife",
            Interest::Cuisine => "cuisine",
            Interest::Wellness => "wellness",
            Interest::Urban => "urban",
            Interest::Seclusion => "seclusion",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// State of one interest toggle on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestSelection {
    /// Whether the traveler switched this interest on.
    pub enabled: bool,
    /// Weight in `[1.0, 5.0]`. Kept even while disabled so re-enabling
    /// restores the previous value.
    pub value: f64,
}

impl Default for InterestSelection {
    fn default() -> Self {
        Self {
            enabled: false,
            value: 3.0,
        }
    }
}

impl InterestSelection {
    /// An enabled selection with the given weight.
    pub fn enabled(value: f64) -> Self {
        Self {
            enabled: true,
            value,
        }
    }
}

/// Travel budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetLevel {
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    Luxury,
}

/// Trip length bracket. Serialized labels match the scoring backend's
/// duration vocabulary exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripDuration {
    Weekend,
    #[serde(rename = "One week")]
    OneWeek,
    #[serde(rename = "Two weeks")]
    TwoWeeks,
    #[serde(rename = "One month")]
    OneMonth,
    #[serde(rename = "More than a month")]
    MoreThanAMonth,
}

/// The full collection of a traveler's criteria for one recommendation
/// query.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceSet {
    /// Budget tier, or `None` for "any budget".
    pub budget_level: Option<BudgetLevel>,
    /// Free-text region filter. Empty strings and the [`ANY_REGION`]
    /// sentinel count as unset.
    pub region: Option<String>,
    /// Preferred average temperature in `[0, 40]` degrees Celsius.
    pub avg_temp: i32,
    /// Selected trip length.
    pub ideal_duration: TripDuration,
    /// Per-interest toggle state.
    pub interests: BTreeMap<Interest, InterestSelection>,
    /// Maximum number of results to request, at least 1.
    pub top_n: u32,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            budget_level: None,
            region: None,
            avg_temp: 20,
            ideal_duration: TripDuration::OneWeek,
            interests: BTreeMap::new(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// A preference field that failed validation during normalization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    #[error("average temperature {0} is outside 0..=40")]
    TemperatureOutOfRange(i32),

    #[error("requested result count must be at least 1")]
    ZeroResultCount,

    #[error("{interest} weight {value} is outside 1.0..=5.0")]
    WeightOutOfRange {
        /// Interest carrying the bad weight.
        interest: Interest,
        /// The rejected weight.
        value: f64,
    },
}

impl PreferenceSet {
    /// Sets the budget tier.
    pub fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget_level = Some(budget);
        self
    }

    /// Sets the region filter.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Enables an interest with the given weight.
    pub fn with_interest(mut self, interest: Interest, value: f64) -> Self {
        self.interests
            .insert(interest, InterestSelection::enabled(value));
        self
    }

    /// Builds the sparse outbound scoring request.
    ///
    /// Pure and deterministic: identical preference values always produce
    /// the same set of present and absent keys. `avg_temp`,
    /// `ideal_durations`, and `top_n` are always emitted; `budget_level`,
    /// `region`, and interest keys only when actually set or enabled.
    pub fn normalize(&self) -> Result<RecommendationRequest, PreferenceError> {
        if !(MIN_AVG_TEMP..=MAX_AVG_TEMP).contains(&self.avg_temp) {
            return Err(PreferenceError::TemperatureOutOfRange(self.avg_temp));
        }
        if self.top_n == 0 {
            return Err(PreferenceError::ZeroResultCount);
        }

        let mut interests = BTreeMap::new();
        for (&interest, selection) in &self.interests {
            if !selection.enabled {
                continue;
            }
            if !(MIN_INTEREST_WEIGHT..=MAX_INTEREST_WEIGHT).contains(&selection.value) {
                return Err(PreferenceError::WeightOutOfRange {
                    interest,
                    value: selection.value,
                });
            }
            interests.insert(interest, selection.value);
        }

        Ok(RecommendationRequest {
            avg_temp: self.avg_temp,
            ideal_durations: vec![self.ideal_duration],
            top_n: self.top_n,
            budget_level: self.budget_level,
            region: normalized_region(self.region.as_deref()),
            interests,
        })
    }
}

/// Maps empty and sentinel region values to omission.
fn normalized_region(region: Option<&str>) -> Option<String> {
    let region = region?.trim();
    if region.is_empty() || region.eq_ignore_ascii_case(ANY_REGION) {
        None
    } else {
        Some(region.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn minimal_preferences_emit_only_required_fields() {
        let request = PreferenceSet::default().normalize().unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "avg_temp": 20,
                "ideal_durations": ["One week"],
                "top_n": 6,
            })
        );
    }

    #[test]
    fn full_preferences_emit_conditional_fields() {
        let request = PreferenceSet::default()
            .with_budget(BudgetLevel::MidRange)
            .with_region("europe")
            .with_interest(Interest::Culture, 5.0)
            .with_interest(Interest::Cuisine, 3.5)
            .normalize()
            .unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "avg_temp": 20,
                "ideal_durations": ["One week"],
                "top_n": 6,
                "budget_level": "Mid-range",
                "region": "europe",
                "culture": 5.0,
                "cuisine": 3.5,
            })
        );
    }

    #[test]
    fn disabling_an_interest_removes_its_key() {
        let mut prefs = PreferenceSet::default().with_interest(Interest::Nightlife, 4.0);

        let before = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
        assert!(before.get("nightlife").is_some());

        prefs
            .interests
            .get_mut(&Interest::Nightlife)
            .unwrap()
            .enabled = false;

        let after = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
        assert!(after.get("nightlife").is_none());
    }

    #[test]
    fn any_region_sentinel_is_omitted() {
        for region in ["any", "Any", "ANY", "", "   ", " any "] {
            let request = PreferenceSet::default()
                .with_region(region)
                .normalize()
                .unwrap();
            assert_eq!(request.region, None, "region {region:?} should be omitted");

            let value = serde_json::to_value(&request).unwrap();
            assert!(value.get("region").is_none(), "region {region:?} leaked");
        }
    }

    #[test]
    fn region_is_never_null_on_the_wire() {
        let request = PreferenceSet::default().normalize().unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(!value
            .as_object()
            .unwrap()
            .values()
            .any(serde_json::Value::is_null));
    }

    #[test]
    fn temperature_outside_range_is_rejected() {
        let mut prefs = PreferenceSet::default();
        prefs.avg_temp = 41;
        assert_eq!(
            prefs.normalize(),
            Err(PreferenceError::TemperatureOutOfRange(41))
        );

        prefs.avg_temp = -1;
        assert_eq!(
            prefs.normalize(),
            Err(PreferenceError::TemperatureOutOfRange(-1))
        );
    }

    #[test]
    fn zero_result_count_is_rejected() {
        let mut prefs = PreferenceSet::default();
        prefs.top_n = 0;
        assert_eq!(prefs.normalize(), Err(PreferenceError::ZeroResultCount));
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let prefs = PreferenceSet::default().with_interest(Interest::Urban, 0.5);
        assert_eq!(
            prefs.normalize(),
            Err(PreferenceError::WeightOutOfRange {
                interest: Interest::Urban,
                value: 0.5,
            })
        );
    }

    #[test]
    fn disabled_interest_weight_is_not_validated() {
        // A stale slider value on a disabled toggle must not block the query.
        let mut prefs = PreferenceSet::default();
        prefs.interests.insert(
            Interest::Urban,
            InterestSelection {
                enabled: false,
                value: 9.0,
            },
        );
        assert!(prefs.normalize().is_ok());
    }

    #[test]
    fn duration_labels_match_backend_vocabulary() {
        let labels: Vec<String> = [
            TripDuration::Weekend,
            TripDuration::OneWeek,
            TripDuration::TwoWeeks,
            TripDuration::OneMonth,
            TripDuration::MoreThanAMonth,
        ]
        .iter()
        .map(|d| serde_json::to_value(d).unwrap().as_str().unwrap().to_string())
        .collect();

        assert_eq!(
            labels,
            [
                "Weekend",
                "One week",
                "Two weeks",
                "One month",
                "More than a month",
            ]
        );
    }

    fn arb_preference_set() -> impl Strategy<Value = PreferenceSet> {
        (
            prop::option::of(prop_oneof![
                Just(BudgetLevel::Budget),
                Just(BudgetLevel::MidRange),
                Just(BudgetLevel::Luxury),
            ]),
            prop::option::of(prop_oneof![
                Just(String::new()),
                Just("any".to_string()),
                Just(" ANY ".to_string()),
                Just("europe".to_string()),
                Just("south_america".to_string()),
            ]),
            MIN_AVG_TEMP..=MAX_AVG_TEMP,
            prop_oneof![
                Just(TripDuration::Weekend),
                Just(TripDuration::OneWeek),
                Just(TripDuration::TwoWeeks),
                Just(TripDuration::OneMonth),
                Just(TripDuration::MoreThanAMonth),
            ],
            prop::collection::vec(
                (any::<bool>(), MIN_INTEREST_WEIGHT..=MAX_INTEREST_WEIGHT),
                Interest::ALL.len(),
            ),
            1u32..=12,
        )
            .prop_map(
                |(budget_level, region, avg_temp, ideal_duration, selections, top_n)| {
                    let interests = Interest::ALL
                        .iter()
                        .zip(selections)
                        .map(|(&interest, (enabled, value))| {
                            (interest, InterestSelection { enabled, value })
                        })
                        .collect();
                    PreferenceSet {
                        budget_level,
                        region,
                        avg_temp,
                        ideal_duration,
                        interests,
                        top_n,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn interest_keys_appear_iff_enabled(prefs in arb_preference_set()) {
            let value = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
            let object = value.as_object().unwrap();

            for (&interest, selection) in &prefs.interests {
                prop_assert_eq!(
                    object.contains_key(interest.key()),
                    selection.enabled,
                    "key {} presence mismatch", interest.key()
                );
            }
        }

        #[test]
        fn region_is_present_only_with_a_real_value(prefs in arb_preference_set()) {
            let value = serde_json::to_value(prefs.normalize().unwrap()).unwrap();

            if let Some(region) = value.get("region") {
                let region = region.as_str().expect("region must be a string");
                prop_assert!(!region.trim().is_empty());
                prop_assert!(!region.eq_ignore_ascii_case(ANY_REGION));
            }
        }

        #[test]
        fn normalization_is_deterministic(prefs in arb_preference_set()) {
            let first = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
            let second = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn required_fields_are_always_present(prefs in arb_preference_set()) {
            let value = serde_json::to_value(prefs.normalize().unwrap()).unwrap();
            let object = value.as_object().unwrap();

            prop_assert!(object.contains_key("avg_temp"));
            prop_assert!(object.contains_key("top_n"));
            prop_assert_eq!(
                object.get("ideal_durations").and_then(|d| d.as_array()).map(|d| d.len()),
                Some(1)
            );
        }
    }
}
