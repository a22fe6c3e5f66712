use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registration payload. Fields are optional so a missing key surfaces as a
/// `MissingField` failure instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AccountValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Username must be between 3 and 30 characters")]
    InvalidUsername,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Credentials that passed the registration checks. The username is already
/// normalized to its stored form.
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ValidLogin {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    /// Runs the registration checks in order, stopping at the first failure:
    /// presence of all three fields, username length, password length,
    /// confirmation match. Usernames are trimmed and lower-cased.
    pub fn validate(self) -> Result<ValidRegistration, AccountValidationError> {
        let username = present(self.username, "username")?;
        let password = present(self.password, "password")?;
        let confirm_password = present(self.confirm_password, "confirmPassword")?;

        let username = username.trim().to_lowercase();
        let length = username.chars().count();
        if !(3..=30).contains(&length) {
            return Err(AccountValidationError::InvalidUsername);
        }

        if password.chars().count() < 6 {
            return Err(AccountValidationError::WeakPassword);
        }

        if password != confirm_password {
            return Err(AccountValidationError::PasswordMismatch);
        }

        Ok(ValidRegistration { username, password })
    }
}

impl LoginRequest {
    /// Requires both fields; the username is normalized the same way
    /// registration stores it so lookups are case-insensitive.
    pub fn validate(self) -> Result<ValidLogin, AccountValidationError> {
        let username = present(self.username, "username")?;
        let password = present(self.password, "password")?;
        Ok(ValidLogin { username: username.trim().to_lowercase(), password })
    }
}

/// Present means the key was sent with a non-empty value. Passwords are not
/// trimmed; whitespace is significant there.
fn present(
    value: Option<String>,
    field: &'static str,
) -> Result<String, AccountValidationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AccountValidationError::MissingField(field)),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedAccount {
    pub username: String,
    /// ObjectId as hex.
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: AccountSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: AuthenticatedAccount,
}
