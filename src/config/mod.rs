//! # Service Configuration
//!
//! Service-level configuration loaded from environment variables.
//!
//! All settings have sensible defaults and can be overridden via environment
//! variables, so the service runs unconfigured in development and picks up
//! its real region/secret identifiers from the deployment environment.

use crate::constants::{DEFAULT_AWS_REGION, DEFAULT_HTTP_PORT, DEFAULT_SECRET_ID};

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP server port for the config routes and probes
    pub http_port: u16,
    /// AWS region hosting the secret bundle
    pub aws_region: String,
    /// Identifier of the secret holding the configuration bundle
    pub secret_id: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            aws_region: DEFAULT_AWS_REGION.to_string(),
            secret_id: DEFAULT_SECRET_ID.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            http_port: env_var_or_default("HTTP_PORT", DEFAULT_HTTP_PORT),
            aws_region: env_var_or_default("AWS_REGION", DEFAULT_AWS_REGION.to_string()),
            secret_id: env_var_or_default("SECRET_ID", DEFAULT_SECRET_ID.to_string()),
        }
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.secret_id, "prod/auth/env");
    }

    #[test]
    fn test_env_var_or_default_parses() {
        // Unset variables fall back to the default
        assert_eq!(env_var_or_default("SCS_TEST_UNSET_VAR", 42u16), 42);
    }
}
