//! Domain types for the recommendation gateway.
//!
//! The domain layer is pure: no I/O, no framework types. It covers the
//! traveler preference model, the sparse wire-format scoring request, the
//! backend-produced recommendation payloads, and saved trips.

pub mod preferences;
pub mod recommendation;
pub mod request;
pub mod trip;

pub use preferences::{
    BudgetLevel, Interest, InterestSelection, PreferenceError, PreferenceSet, TripDuration,
};
pub use recommendation::{Recommendation, RecommendationResponse};
pub use request::RecommendationRequest;
pub use trip::{Trip, TripDraft, TripId};
