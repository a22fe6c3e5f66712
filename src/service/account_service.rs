use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;
use tracing::{error, info, instrument, warn};

use crate::dto::account_dto::{
    AccountSummary, AuthenticatedAccount, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
use crate::model::account::Account;
use crate::repository::account_repo::{AccountRepository, MongoAccountRepository};
use crate::util::error::ApiError;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError>;
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;
}

pub struct AccountServiceImpl {
    pub repo: Arc<MongoAccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repo: Arc<MongoAccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[instrument(skip(self, request))]
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let valid = request.validate()?;
        info!(username = %valid.username, "Registering new account");

        // Friendly pre-check; the unique index still backstops races.
        if self.repo.find_by_username(&valid.username).await?.is_some() {
            warn!(username = %valid.username, "Username already taken");
            return Err(ApiError::DuplicateUsername);
        }

        // Bcrypt at cost 12 is slow enough to block a runtime thread.
        let password = valid.password;
        let hash = task::spawn_blocking(move || PasswordUtilsImpl::hash_password(&password))
            .await
            .map_err(|e| ApiError::Storage(format!("Hashing task failed: {}", e)))??;

        let account = Account {
            id: None,
            username: valid.username,
            password_hash: hash,
            created_at: bson::DateTime::now(),
        };
        let inserted = self.repo.insert(account).await;
        match &inserted {
            Ok(_) => info!("Account registered successfully"),
            Err(e) => error!("Failed to register account: {e}"),
        }
        let inserted = inserted?;

        Ok(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user: AccountSummary {
                username: inserted.username,
            },
        })
    }

    #[instrument(skip(self, request))]
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let valid = request.validate()?;
        info!(username = %valid.username, "Login attempt");

        let account = match self.repo.find_by_username(&valid.username).await? {
            Some(account) => account,
            None => {
                // Same response as a wrong password so usernames cannot be probed.
                warn!(username = %valid.username, "Login attempt for unknown username");
                return Err(ApiError::InvalidCredentials);
            }
        };

        let password = valid.password;
        let hash = account.password_hash.clone();
        let matches =
            task::spawn_blocking(move || PasswordUtilsImpl::verify_password(&password, &hash))
                .await
                .map_err(|e| ApiError::Storage(format!("Verification task failed: {}", e)))??;

        if !matches {
            warn!(username = %valid.username, "Wrong password");
            return Err(ApiError::InvalidCredentials);
        }

        info!(username = %valid.username, "Login successful");
        Ok(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: AuthenticatedAccount {
                username: account.username,
                id: account.id.map(|id| id.to_hex()).unwrap_or_default(),
            },
        })
    }
}
