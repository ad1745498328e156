//! Adapters - implementations of the ports against concrete technology.

pub mod backend;
pub mod http;
pub mod trips;
