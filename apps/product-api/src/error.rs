//! Error types for the product API.

use product_core::ValidationError;
use tonic::Status;

/// Errors surfaced to gRPC callers.
///
/// Handlers decide which variant a storage failure becomes; the variant in
/// turn fixes the status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidRequest(error.to_string())
    }
}

impl From<ApiError> for Status {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::InvalidRequest(msg) => Status::invalid_argument(msg),
            ApiError::NotFound(msg) => Status::not_found(msg),
            ApiError::Internal(msg) => Status::internal(msg),
        }
    }
}
