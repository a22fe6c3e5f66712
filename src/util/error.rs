use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::dto::account_dto::AccountValidationError;
use crate::dto::item_dto::ItemValidationError;
use crate::repository::repository_error::RepositoryError;
use crate::util::password::PasswordError;
use crate::util::upload::UploadError;

/// Every failure a handler can surface. Each variant carries the message the
/// client sees; storage details stay in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidUpload(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Username must be between 3 and 30 characters")]
    InvalidUsername,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Internal server error")]
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(ref detail) = self {
            error!("Storage failure: {}", detail);
        }
        let status = match self {
            ApiError::Validation(_)
            | ApiError::InvalidUpload(_)
            | ApiError::MissingField(_)
            | ApiError::InvalidUsername
            | ApiError::WeakPassword
            | ApiError::PasswordMismatch => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUsername => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<ItemValidationError> for ApiError {
    fn from(err: ItemValidationError) -> Self {
        match err {
            ItemValidationError::MissingField(field) => ApiError::MissingField(field),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl From<AccountValidationError> for ApiError {
    fn from(err: AccountValidationError) -> Self {
        match err {
            AccountValidationError::MissingField(field) => ApiError::MissingField(field),
            AccountValidationError::InvalidUsername => ApiError::InvalidUsername,
            AccountValidationError::WeakPassword => ApiError::WeakPassword,
            AccountValidationError::PasswordMismatch => ApiError::PasswordMismatch,
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        ApiError::InvalidUpload(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // The only unique index is on usernames, so a duplicate key can
            // only mean a taken username.
            RepositoryError::AlreadyExists(_) => ApiError::DuplicateUsername,
            other => ApiError::Storage(other.to_string()),
        }
    }
}
