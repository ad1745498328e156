//! Ports - interfaces between the core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the
//! application layer depends on. Adapters implement them.
//!
//! - `RecommendationBackend` - the external scoring service boundary
//! - `TripRepository` - the saved-trip collection boundary

mod recommender;
mod trip_repository;

pub use recommender::{RecommendError, RecommendationBackend};
pub use trip_repository::{TripRepository, TripRepositoryError};
