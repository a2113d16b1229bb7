//! # Configuration Load Error Types
//!
//! Defines the error taxonomy for loading the secret bundle, with one
//! variant per classified backend error kind plus a passthrough for
//! anything the backend reports that we do not model.

use thiserror::Error;

/// Failure to load the configuration bundle from the secrets backend
///
/// Every variant is fatal to the `get` call that triggered the load and
/// leaves the store unloaded, so the next call retries from scratch.
/// A key missing from a loaded bundle is NOT an error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Backend could not decrypt the protected secret text
    #[error("secrets backend could not decrypt the secret: {0}")]
    DecryptionFailure(String),

    /// An error occurred on the backend side
    #[error("secrets backend internal error: {0}")]
    InternalServiceError(String),

    /// An invalid value was supplied for a request parameter
    #[error("invalid parameter in secrets backend request: {0}")]
    InvalidParameter(String),

    /// The request is not valid for the current state of the resource
    #[error("invalid request for current resource state: {0}")]
    InvalidRequest(String),

    /// The configured secret identifier does not exist
    #[error("configured secret not found: {0}")]
    ResourceNotFound(String),

    /// The retrieved secret body is not a flat JSON string map
    #[error("secret payload is not a flat JSON object: {0}")]
    MalformedPayload(String),

    /// The backend could not be reached (transport failure or timeout)
    #[error("secrets backend unreachable: {0}")]
    Unavailable(String),

    /// Any other backend-reported error, passed through with its code
    #[error("secrets backend error {code}: {message}")]
    Unclassified { code: String, message: String },
}

impl LoadError {
    /// Stable snake_case label for this error kind, used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::DecryptionFailure(_) => "decryption_failure",
            LoadError::InternalServiceError(_) => "internal_service_error",
            LoadError::InvalidParameter(_) => "invalid_parameter",
            LoadError::InvalidRequest(_) => "invalid_request",
            LoadError::ResourceNotFound(_) => "resource_not_found",
            LoadError::MalformedPayload(_) => "malformed_payload",
            LoadError::Unavailable(_) => "unavailable",
            LoadError::Unclassified { .. } => "unclassified",
        }
    }
}
