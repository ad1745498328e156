//! Wayfinder - Presentation gateway for a travel recommendation service.
//!
//! This crate collects traveler preferences, normalizes them into sparse
//! scoring requests, forwards them to an external scoring backend, and
//! manages an ephemeral collection of saved trips.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
