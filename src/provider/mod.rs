//! # Secrets Backend Providers
//!
//! Provider implementations of the [`crate::store::SecretsBackend`] port.

pub mod aws;

pub use aws::AwsSecretsManager;
