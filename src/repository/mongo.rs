use mongodb::options::{ClientOptions, Credential, ResolverConfig};
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::mongo_conf::MongoConfig;
use crate::model::account::Account;
use crate::model::item::{Item, ItemKind};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// One client and connection pool for the whole process, built at startup.
/// Repositories borrow typed collection handles from it instead of opening
/// connections of their own.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(config: &MongoConfig) -> RepositoryResult<Self> {
        let mut client_options =
            ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare())
                .await?;
        client_options.app_name = Some("NovaBackend".to_string());
        client_options.max_pool_size = Some(config.pool_size);
        client_options.connect_timeout =
            Some(std::time::Duration::from_secs(config.connection_timeout_secs));

        if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
            client_options.credential = Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .build(),
            );
        }

        let client = Client::with_options(client_options)?;
        let database = match config.database.as_deref() {
            Some(name) => client.database(name),
            None => client.default_database().ok_or_else(|| {
                RepositoryError::connection(
                    "connection URI names no default database and MONGO_DATABASE is not set",
                )
            })?,
        };

        info!("MongoDB store initialized for database '{}'", database.name());
        Ok(MongoStore { database })
    }

    pub fn items(&self, kind: ItemKind) -> Collection<Item> {
        self.database.collection::<Item>(kind.collection_name())
    }

    pub fn accounts(&self) -> Collection<Account> {
        self.database.collection::<Account>("users")
    }
}
