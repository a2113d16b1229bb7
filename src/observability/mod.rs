//! # Observability
//!
//! Metrics for the config store and its secrets backend.

pub mod metrics;
