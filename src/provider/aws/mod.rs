//! # AWS Secrets Manager Backend
//!
//! Secrets backend implementation on top of the AWS Secrets Manager API.
//!
//! The client is configured once at startup with the service region. For
//! local development and contract tests the `AWS_SECRETS_MANAGER_ENDPOINT`
//! environment variable reroutes requests to a mock endpoint instead of the
//! real AWS API.

mod error;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::info;

use crate::store::{LoadError, SecretsBackend};

/// AWS Secrets Manager provider implementation
pub struct AwsSecretsManager {
    client: SecretsManagerClient,
    region: String,
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManager {
    /// Create a new AWS Secrets Manager client for the given region
    ///
    /// Credentials come from the SDK's default chain (environment, shared
    /// config, instance metadata).
    pub async fn new(region: &str) -> Self {
        let sdk_config = create_sdk_config(region).await;
        let client = SecretsManagerClient::new(&sdk_config);
        info!(region = %region, "created AWS Secrets Manager client");

        Self {
            client,
            region: region.to_string(),
        }
    }
}

/// Create AWS SDK config using the default credential chain
async fn create_sdk_config(region: &str) -> SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    // Route requests to a mock endpoint instead of real AWS when set
    if let Ok(endpoint) = std::env::var("AWS_SECRETS_MANAGER_ENDPOINT") {
        info!(
            "routing AWS Secrets Manager requests to {}",
            endpoint
        );
        builder = builder.endpoint_url(&endpoint);
    }

    builder.load().await
}

#[async_trait]
impl SecretsBackend for AwsSecretsManager {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, LoadError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(error::classify_sdk_error)?;

        // Binary-only secrets cannot hold a flat JSON object
        output
            .secret_string()
            .map(ToOwned::to_owned)
            .ok_or_else(|| {
                LoadError::MalformedPayload("secret value has no string payload".to_string())
            })
    }
}
