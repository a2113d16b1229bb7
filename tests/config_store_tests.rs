//! # Config Store Integration Tests
//!
//! These tests drive the public library API end-to-end:
//! 1. A scripted secrets backend stands in for AWS Secrets Manager
//! 2. The config store loads lazily through the backend
//! 3. The HTTP router serves values, sentinel responses, and errors
//!
//! Run with: `cargo test --test config_store_tests`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use secret_config_service::server::{build_router, AppState};
use secret_config_service::store::{ConfigStore, LoadError, SecretsBackend};

const BUNDLE_JSON: &str = r#"{"PORT":"3000","MONGO_HOST":"localhost"}"#;

/// Backend that fails its first fetch and serves the bundle afterwards
struct FlakyBackend {
    calls: AtomicUsize,
}

impl FlakyBackend {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretsBackend for FlakyBackend {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, LoadError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(LoadError::ResourceNotFound(secret_id.to_string()))
        } else {
            Ok(BUNDLE_JSON.to_string())
        }
    }
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_recovery_after_backend_failure() {
    let backend = Arc::new(FlakyBackend::new());
    let store = Arc::new(ConfigStore::new(backend.clone(), "prod/auth/env"));
    let app = build_router(AppState {
        store: store.clone(),
    });

    // First request hits the scripted failure; the error surfaces and the
    // store stays unloaded
    let (status, body) = get_body(app.clone(), "/firstPhrase").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("resource_not_found"));
    assert!(!store.is_loaded());

    // Next request re-attempts the load against the now-healthy backend
    let (status, body) = get_body(app.clone(), "/firstPhrase").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "3000");
    assert!(store.is_loaded());

    // Further lookups are served from the cache without new backend calls
    let (status, body) = get_body(app, "/secondPhrase").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "localhost");
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_loaded_store_never_refetches() {
    let backend = Arc::new(FlakyBackend::new());
    let store = ConfigStore::new(backend.clone(), "prod/auth/env");

    // Prime the store past the scripted failure
    assert!(store.get("PORT").await.is_err());
    assert_eq!(
        store.get("PORT").await.unwrap(),
        Some("3000".to_string())
    );

    for _ in 0..10 {
        assert_eq!(
            store.get("MONGO_HOST").await.unwrap(),
            Some("localhost".to_string())
        );
        assert_eq!(store.get("UNSET_KEY").await.unwrap(), None);
    }

    assert!(store.is_loaded());
    assert_eq!(backend.calls(), 2);
}
