use crate::model::account::Account;
use crate::repository::mongo::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use tracing::{error, info};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: Account) -> RepositoryResult<Account>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>>;
}

pub struct MongoAccountRepository {
    collection: mongodb::Collection<Account>,
}

impl MongoAccountRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoAccountRepository { collection: store.accounts() }
    }

    /// Unique index on username. Concurrent registrations that slip past the
    /// pre-insert lookup resolve to a duplicate-key error on insert.
    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        info!("Unique username index ensured");
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    #[tracing::instrument(skip(self, account), fields(username = %account.username))]
    async fn insert(&self, account: Account) -> RepositoryResult<Account> {
        info!("Inserting new account");
        let mut new_account = account;
        new_account.id = Some(ObjectId::new());

        let result = self.collection.insert_one(new_account.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Account inserted successfully");
                Ok(new_account)
            }
            Err(e) => {
                error!("Failed to insert account: {}", e);
                // From keeps duplicate-key errors distinguishable
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(username = %username))]
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>> {
        let filter = doc! { "username": username };
        let account = self.collection.find_one(filter, None).await.map_err(|e| {
            RepositoryError::database(format!("Failed to find account by username: {}", e))
        })?;
        Ok(account)
    }
}
