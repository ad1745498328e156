//! Saved-trip endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTripRequest, TripResponse};
pub use routes::trip_routes;
