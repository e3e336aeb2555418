//! HTTP server for running Swiss tournaments.
//!
//! Wraps the `swiss_tournament` managers in a JSON API, with configuration
//! from the environment, structured logging and optional Prometheus metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
