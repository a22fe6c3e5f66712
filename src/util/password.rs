//! Password hashing and verification utilities
//!
//! This module provides secure password hashing using bcrypt with a fixed
//! cost factor and verification against stored hashes.

use tracing::{debug, error};

/// Bcrypt cost factor applied to every new hash.
pub const HASH_COST: u32 = 12;

/// Error types for password operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

pub trait PasswordUtils {
    /// Hashes the given password with bcrypt, salt included in the output
    fn hash_password(password: &str) -> Result<String, PasswordError>;

    /// Verifies the given password against the stored hash
    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError>;
}

pub struct PasswordUtilsImpl;

impl PasswordUtils for PasswordUtilsImpl {
    fn hash_password(password: &str) -> Result<String, PasswordError> {
        debug!("Hashing password");

        match bcrypt::hash(password, HASH_COST) {
            Ok(hash) => Ok(hash),
            Err(err) => {
                error!("Failed to hash password: {}", err);
                Err(PasswordError::HashingFailed(err.to_string()))
            }
        }
    }

    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
        debug!("Verifying password against stored hash");

        // Bcrypt hashes always carry the $2 version prefix
        if !hash.starts_with("$2") {
            error!("Stored hash is not in bcrypt format");
            return Err(PasswordError::InvalidHashFormat);
        }

        match bcrypt::verify(password, hash) {
            Ok(valid) => {
                debug!("Password verification completed");
                Ok(valid)
            }
            Err(err) => {
                error!("Password verification error: {}", err);
                Err(PasswordError::VerificationFailed(err.to_string()))
            }
        }
    }
}
