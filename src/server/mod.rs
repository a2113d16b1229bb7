//! # HTTP Server
//!
//! Routing glue over the config store.
//!
//! The content routes mirror the service's public surface: `/` greets,
//! `/firstPhrase` and `/secondPhrase` serve the `PORT` and `MONGO_HOST`
//! configuration values. `/healthz` and `/metrics` are operational
//! endpoints for probes and Prometheus scraping.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::NOT_FOUND_SENTINEL;
use crate::observability;
use crate::store::{ConfigStore, LoadError};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The long-lived config store instance
    pub store: Arc<ConfigStore>,
}

/// JSON body returned for failed config lookups
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// HTTP-facing wrapper for load failures
#[derive(Debug)]
pub struct ApiError(LoadError);

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            LoadError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.kind(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the service router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/firstPhrase", get(first_phrase))
        .route("/secondPhrase", get(second_phrase))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve requests until the process exits
pub async fn start_server(port: u16, state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("secret-config-service listening on {addr}");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn index() -> &'static str {
    "Hello World!"
}

async fn first_phrase(State(state): State<AppState>) -> Result<String, ApiError> {
    phrase(&state.store, "PORT").await
}

async fn second_phrase(State(state): State<AppState>) -> Result<String, ApiError> {
    phrase(&state.store, "MONGO_HOST").await
}

/// Serve one configuration value, rendering absence as the sentinel text
async fn phrase(store: &ConfigStore, key: &str) -> Result<String, ApiError> {
    let value = store.get(key).await?;
    Ok(value.unwrap_or_else(|| NOT_FOUND_SENTINEL.to_string()))
}

/// Liveness probe: only checks that the process can respond to HTTP
async fn healthz() -> &'static str {
    "ok"
}

async fn metrics() -> Response {
    match observability::metrics::render() {
        Ok(body) => body.into_response(),
        Err(e) => {
            error!("failed to render metrics: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
