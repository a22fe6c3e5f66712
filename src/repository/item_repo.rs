use crate::model::item::{Item, ItemKind};
use crate::repository::mongo::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt; // For next on MongoDB cursor
use mongodb::options::FindOptions;
use tracing::{error, info};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(&self, item: Item) -> RepositoryResult<Item>;
    async fn list_newest_first(&self) -> RepositoryResult<Vec<Item>>;
}

/// Repository over one of the two item collections; the bound `ItemKind`
/// decides which.
pub struct MongoItemRepository {
    collection: mongodb::Collection<Item>,
    kind: ItemKind,
}

impl MongoItemRepository {
    pub fn new(store: &MongoStore, kind: ItemKind) -> Self {
        MongoItemRepository { collection: store.items(kind), kind }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[tracing::instrument(skip(self, item), fields(kind = self.kind.label(), name = %item.name))]
    async fn insert(&self, item: Item) -> RepositoryResult<Item> {
        info!("Inserting {} item", self.kind.label());
        let mut new_item = item;
        // Set id manually before inserting
        new_item.id = Some(ObjectId::new());

        let result = self.collection.insert_one(new_item.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Item inserted successfully");
                Ok(new_item)
            }
            Err(e) => {
                error!("Failed to insert item: {}", e);
                Err(RepositoryError::database(format!("Failed to insert item: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(kind = self.kind.label()))]
    async fn list_newest_first(&self) -> RepositoryResult<Vec<Item>> {
        info!("Listing {} items, newest first", self.kind.label());
        let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
        let cursor = self.collection.find(None, options).await;
        match cursor {
            Ok(mut cursor) => {
                let mut items = Vec::new();
                while let Some(item) = cursor.next().await {
                    match item {
                        Ok(i) => items.push(i),
                        Err(e) => {
                            error!("Failed to deserialize item: {}", e);
                            return Err(RepositoryError::serialization(format!(
                                "Failed to deserialize item: {}",
                                e
                            )));
                        }
                    }
                }
                info!("Fetched {} items", items.len());
                Ok(items)
            }
            Err(e) => {
                error!("Failed to list items: {}", e);
                Err(RepositoryError::database(format!("Failed to list items: {}", e)))
            }
        }
    }
}
