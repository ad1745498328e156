//! Trip repository port - boundary to the saved-trip collection.

use async_trait::async_trait;

use crate::domain::{Trip, TripDraft};

/// Port for the process-lifetime collection of saved trips.
///
/// The contract is append-only: trips are inserted and listed, never
/// updated or deleted. Implementations must serialize inserts so two
/// concurrent calls cannot corrupt the collection or hand out duplicate
/// ids.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Returns a snapshot of all saved trips, in insertion order.
    async fn list(&self) -> Result<Vec<Trip>, TripRepositoryError>;

    /// Assigns a fresh id to the draft, appends the trip, and returns it.
    async fn insert(&self, draft: TripDraft) -> Result<Trip, TripRepositoryError>;
}

/// Failures at the trip-collection boundary.
#[derive(Debug, thiserror::Error)]
pub enum TripRepositoryError {
    #[error("trip storage failed: {0}")]
    Storage(String),
}
