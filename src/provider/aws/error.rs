//! # AWS SDK Error Classification
//!
//! Maps AWS SDK errors from the `GetSecretValue` operation onto the
//! [`LoadError`] taxonomy. The five modeled service exceptions get their own
//! variants; transport failures and timeouts become `Unavailable`; anything
//! else passes through as `Unclassified` with the backend-reported code kept
//! for diagnostics.

use aws_sdk_secretsmanager::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;

use crate::store::LoadError;

/// Classify a `GetSecretValue` SDK error into the load error taxonomy
pub(crate) fn classify_sdk_error(err: SdkError<GetSecretValueError>) -> LoadError {
    match err {
        SdkError::TimeoutError(_) => {
            LoadError::Unavailable("request to secrets backend timed out".to_string())
        }
        SdkError::DispatchFailure(e) => LoadError::Unavailable(
            e.as_connector_error()
                .map_or_else(|| "dispatch failure".to_string(), ToString::to_string),
        ),
        other => classify_service_error(other.into_service_error()),
    }
}

/// Classify a service-level `GetSecretValue` error
pub(crate) fn classify_service_error(err: GetSecretValueError) -> LoadError {
    let message = err.message().unwrap_or_default().to_string();
    match err {
        GetSecretValueError::DecryptionFailure(_) => LoadError::DecryptionFailure(message),
        GetSecretValueError::InternalServiceError(_) => LoadError::InternalServiceError(message),
        GetSecretValueError::InvalidParameterException(_) => LoadError::InvalidParameter(message),
        GetSecretValueError::InvalidRequestException(_) => LoadError::InvalidRequest(message),
        GetSecretValueError::ResourceNotFoundException(_) => LoadError::ResourceNotFound(message),
        other => LoadError::Unclassified {
            code: other.code().unwrap_or("Unknown").to_string(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_secretsmanager::error::ErrorMetadata;
    use aws_sdk_secretsmanager::types::error::{
        DecryptionFailure, InternalServiceError, InvalidParameterException,
        InvalidRequestException, ResourceNotFoundException,
    };

    #[test]
    fn test_decryption_failure_is_classified() {
        let err = GetSecretValueError::DecryptionFailure(
            DecryptionFailure::builder()
                .message("KMS key unusable")
                .build(),
        );
        let classified = classify_service_error(err);
        assert!(matches!(classified, LoadError::DecryptionFailure(ref m) if m == "KMS key unusable"));
    }

    #[test]
    fn test_internal_service_error_is_classified() {
        let err = GetSecretValueError::InternalServiceError(
            InternalServiceError::builder().message("server fault").build(),
        );
        assert!(matches!(
            classify_service_error(err),
            LoadError::InternalServiceError(_)
        ));
    }

    #[test]
    fn test_invalid_parameter_is_classified() {
        let err = GetSecretValueError::InvalidParameterException(
            InvalidParameterException::builder()
                .message("bad parameter")
                .build(),
        );
        assert!(matches!(
            classify_service_error(err),
            LoadError::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_invalid_request_is_classified() {
        let err = GetSecretValueError::InvalidRequestException(
            InvalidRequestException::builder()
                .message("secret is scheduled for deletion")
                .build(),
        );
        assert!(matches!(
            classify_service_error(err),
            LoadError::InvalidRequest(_)
        ));
    }

    #[test]
    fn test_resource_not_found_is_classified() {
        let err = GetSecretValueError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Secrets Manager can't find the specified secret")
                .build(),
        );
        assert!(matches!(
            classify_service_error(err),
            LoadError::ResourceNotFound(_)
        ));
    }

    #[test]
    fn test_unmodeled_error_passes_through_with_code() {
        let err = GetSecretValueError::generic(
            ErrorMetadata::builder()
                .code("ThrottlingException")
                .message("rate exceeded")
                .build(),
        );
        match classify_service_error(err) {
            LoadError::Unclassified { code, message } => {
                assert_eq!(code, "ThrottlingException");
                assert_eq!(message, "rate exceeded");
            }
            other => panic!("expected Unclassified, got {other:?}"),
        }
    }
}
