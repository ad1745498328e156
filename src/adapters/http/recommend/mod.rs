//! Recommendation proxy endpoint.

mod handlers;
mod routes;

pub use routes::recommend_routes;
