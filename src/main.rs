//! # Secret Config Service
//!
//! A small HTTP service that serves configuration values held in AWS
//! Secrets Manager.
//!
//! ## Overview
//!
//! 1. **Lazy loading** - The secret bundle is fetched on the first lookup,
//!    not at startup, so the service boots without backend access.
//! 2. **In-memory cache** - One successful fetch serves every subsequent
//!    lookup for the process lifetime; concurrent first lookups share a
//!    single in-flight backend call.
//! 3. **Retry on next access** - A failed load leaves the store unloaded
//!    and the triggering request fails; the next request retries.
//! 4. **Prometheus metrics** - Load attempts, classified load errors, and
//!    cache hit/miss counters on `/metrics`.
//! 5. **Health probe** - `/healthz` liveness endpoint.
//!
//! Configuration comes from environment variables: `HTTP_PORT`,
//! `AWS_REGION`, `SECRET_ID`, and optionally
//! `AWS_SECRETS_MANAGER_ENDPOINT` to target a local mock backend.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use secret_config_service::config::ServiceConfig;
use secret_config_service::observability;
use secret_config_service::provider::AwsSecretsManager;
use secret_config_service::server::{start_server, AppState};
use secret_config_service::store::ConfigStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    // We use ring as the crypto provider
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "secret_config_service=info".into()),
        )
        .init();

    info!("Starting Secret Config Service");

    observability::metrics::register_metrics().context("Failed to register metrics")?;

    let config = ServiceConfig::from_env();
    info!(
        region = %config.aws_region,
        secret_id = %config.secret_id,
        "service configured"
    );

    let backend = Arc::new(AwsSecretsManager::new(&config.aws_region).await);
    let store = Arc::new(ConfigStore::new(backend, config.secret_id.clone()));

    start_server(config.http_port, AppState { store }).await
}
