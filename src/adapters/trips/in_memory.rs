//! In-memory trip repository.
//!
//! Process-lifetime storage for saved trips. The write lock serializes
//! inserts, so concurrent saves cannot corrupt the collection, and ids
//! come from random UUIDs rather than the clock.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{BudgetLevel, Interest, Trip, TripDraft};
use crate::ports::{TripRepository, TripRepositoryError};

/// In-memory, insertion-ordered trip collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripRepository {
    trips: Arc<RwLock<Vec<Trip>>>,
}

impl InMemoryTripRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with two demo trips, for environments
    /// without a real store behind them.
    pub async fn with_sample_trips() -> Self {
        let repo = Self::new();

        let culture_tour = TripDraft {
            budget_level: Some(BudgetLevel::MidRange),
            region: Some("Europe".to_string()),
            interests: BTreeMap::from([
                (Interest::Culture, 5.0),
                (Interest::Adventure, 2.0),
                (Interest::Nature, 1.0),
            ]),
            ..TripDraft::new("European Culture Tour", "Paris, France")
        };
        let beach_paradise = TripDraft {
            budget_level: Some(BudgetLevel::Luxury),
            region: Some("Asia".to_string()),
            interests: BTreeMap::from([
                (Interest::Beaches, 5.0),
                (Interest::Wellness, 4.0),
                (Interest::Seclusion, 5.0),
            ]),
            ..TripDraft::new("Beach Paradise", "Maldives")
        };

        // Seeding cannot fail on the in-memory store.
        let _ = repo.insert(culture_tour).await;
        let _ = repo.insert(beach_paradise).await;
        repo
    }

    /// Removes every stored trip (useful for tests).
    pub async fn clear(&self) {
        self.trips.write().await.clear();
    }

    /// Number of stored trips.
    pub async fn len(&self) -> usize {
        self.trips.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.trips.read().await.is_empty()
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn list(&self) -> Result<Vec<Trip>, TripRepositoryError> {
        Ok(self.trips.read().await.clone())
    }

    async fn insert(&self, draft: TripDraft) -> Result<Trip, TripRepositoryError> {
        let trip = Trip::from_draft(draft);
        let mut trips = self.trips.write().await;
        trips.push(trip.clone());
        Ok(trip)
    }
}
