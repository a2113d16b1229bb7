//! # Constants
//!
//! Default values for service configuration.

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default AWS region hosting the secret bundle
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default secret identifier of the configuration bundle
pub const DEFAULT_SECRET_ID: &str = "prod/auth/env";

/// Body returned by the content routes when a key is absent from the bundle
///
/// Kept byte-for-byte compatible with the service's historical response.
/// Internally absence is `None`; the sentinel only exists at the HTTP edge.
pub const NOT_FOUND_SENTINEL: &str = "Doesn't exist";
