//! # Config Store Metrics
//!
//! Prometheus counters for bundle loads and cache lookups, exposed on the
//! `/metrics` endpoint.

use anyhow::Result;
use prometheus::{Encoder, IntCounter, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

/// Process-wide metrics registry
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static CONFIG_LOAD_ATTEMPTS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secret_config_load_attempts_total",
        "Total number of configuration bundle load attempts",
    )
    .expect("Failed to create CONFIG_LOAD_ATTEMPTS_TOTAL metric - this should never happen")
});

static CONFIG_LOAD_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_config_load_errors_total",
            "Total number of configuration bundle load errors by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create CONFIG_LOAD_ERRORS_TOTAL metric - this should never happen")
});

static CONFIG_LOOKUPS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_config_lookups_total",
            "Total number of cache lookups by result (hit/miss)",
        ),
        &["result"],
    )
    .expect("Failed to create CONFIG_LOOKUPS_TOTAL metric - this should never happen")
});

/// Register all metrics with the process registry
///
/// Called once at startup; registering twice is an error.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(CONFIG_LOAD_ATTEMPTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CONFIG_LOAD_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CONFIG_LOOKUPS_TOTAL.clone()))?;
    Ok(())
}

/// Record a bundle load attempt
pub fn increment_load_attempts() {
    CONFIG_LOAD_ATTEMPTS_TOTAL.inc();
}

/// Record a bundle load error with its classified kind
pub fn increment_load_errors(kind: &str) {
    CONFIG_LOAD_ERRORS_TOTAL.with_label_values(&[kind]).inc();
}

/// Record a cache lookup result ("hit" or "miss")
pub fn increment_lookups(result: &str) {
    CONFIG_LOOKUPS_TOTAL.with_label_values(&[result]).inc();
}

/// Render all registered metrics in the Prometheus text exposition format
pub fn render() -> Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
