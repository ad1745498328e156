//! Application layer - the seam the presentation layer calls through.

mod client;

pub use client::{ClientError, TravelClient};
