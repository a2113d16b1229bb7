//! # Config Store
//!
//! Lazily loaded, in-memory cached view of the secret bundle.
//!
//! The store fetches the configured secret from the backend on first access,
//! parses it as a flat JSON object, and serves every subsequent lookup from
//! the cached map. The backend is queried at most once per process lifetime
//! on the success path; a failed load leaves the store unloaded so the next
//! lookup retries from scratch.

mod error;

pub use error::LoadError;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::observability;

/// Flat key/value document retrieved from the backend in one call
pub type SecretBundle = HashMap<String, String>;

/// Abstraction over the secrets backend
///
/// The production implementation talks to AWS Secrets Manager; tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait SecretsBackend: Send + Sync {
    /// Retrieve the raw string payload of the secret with the given identifier
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, LoadError>;
}

/// Lazily loaded configuration store backed by a secrets backend
///
/// One long-lived instance is created at startup and shared with the HTTP
/// layer. The cell being initialized is the loaded flag; its value is the
/// cache. Concurrent first lookups share a single in-flight load.
pub struct ConfigStore {
    backend: Arc<dyn SecretsBackend>,
    secret_id: String,
    bundle: OnceCell<SecretBundle>,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("secret_id", &self.secret_id)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl ConfigStore {
    /// Create an unloaded store for the given secret identifier
    pub fn new(backend: Arc<dyn SecretsBackend>, secret_id: impl Into<String>) -> Self {
        Self {
            backend,
            secret_id: secret_id.into(),
            bundle: OnceCell::new(),
        }
    }

    /// Look up a configuration value, loading the bundle on first access
    ///
    /// Returns `Ok(None)` when the key is absent from the loaded bundle;
    /// absence is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when the bundle has not been loaded yet and
    /// the load fails. The store stays unloaded in that case, so the next
    /// call re-attempts the load.
    pub async fn get(&self, key: &str) -> Result<Option<String>, LoadError> {
        let bundle = self.bundle.get_or_try_init(|| self.load()).await?;

        let value = bundle.get(key).cloned();
        observability::metrics::increment_lookups(if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    /// Whether the bundle has been fetched and cached
    pub fn is_loaded(&self) -> bool {
        self.bundle.initialized()
    }

    /// Fetch and parse the bundle
    ///
    /// The map is fully populated before it is published to the cell, so
    /// readers never observe a partial bundle.
    async fn load(&self) -> Result<SecretBundle, LoadError> {
        observability::metrics::increment_load_attempts();
        info!(secret_id = %self.secret_id, "loading configuration bundle");

        let payload = self
            .backend
            .fetch_secret(&self.secret_id)
            .await
            .inspect_err(|e| {
                observability::metrics::increment_load_errors(e.kind());
                error!(secret_id = %self.secret_id, error = %e, "bundle fetch failed");
            })?;

        let bundle = parse_bundle(&payload).inspect_err(|e| {
            observability::metrics::increment_load_errors(e.kind());
            error!(secret_id = %self.secret_id, error = %e, "bundle parse failed");
        })?;

        info!(
            secret_id = %self.secret_id,
            keys = bundle.len(),
            "configuration bundle loaded"
        );
        Ok(bundle)
    }
}

/// Parse a secret payload as a flat JSON object of string values
///
/// Nested values, non-string values, and non-object payloads are all
/// rejected as malformed rather than silently ignored.
fn parse_bundle(payload: &str) -> Result<SecretBundle, LoadError> {
    serde_json::from_str::<SecretBundle>(payload)
        .map_err(|e| LoadError::MalformedPayload(e.to_string()))
}
