use std::sync::Arc;

use async_trait::async_trait;
use bson::spec::BinarySubtype;
use bson::Binary;
use tracing::{error, info, instrument};

use crate::dto::item_dto::{ItemResponse, ItemSubmission, ReportItemResponse};
use crate::model::item::{Item, ItemImage, ItemKind};
use crate::repository::item_repo::{ItemRepository, MongoItemRepository};
use crate::util::error::ApiError;

/// Reporting and listing for a single item collection. The app wires one
/// instance per `ItemKind`.
#[async_trait]
pub trait ItemService: Send + Sync {
    async fn report_item(
        &self,
        submission: ItemSubmission,
    ) -> Result<ReportItemResponse, ApiError>;
    async fn list_items(&self) -> Result<Vec<ItemResponse>, ApiError>;
}

pub struct ItemServiceImpl {
    pub repo: Arc<MongoItemRepository>,
    pub kind: ItemKind,
}

impl ItemServiceImpl {
    pub fn new(repo: Arc<MongoItemRepository>, kind: ItemKind) -> Self {
        Self { repo, kind }
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    #[instrument(skip(self, submission), fields(kind = self.kind.label()))]
    async fn report_item(
        &self,
        submission: ItemSubmission,
    ) -> Result<ReportItemResponse, ApiError> {
        info!("Reporting {} item", self.kind.label());
        let valid = submission.validate()?;

        // Reports without a date use the time of submission.
        let date = match valid.date {
            Some(client_date) => bson::DateTime::from_chrono(client_date),
            None => bson::DateTime::now(),
        };
        let image = valid.image.map(|upload| ItemImage {
            data: Binary {
                subtype: BinarySubtype::Generic,
                bytes: upload.data,
            },
            content_type: upload.content_type,
        });
        let item = Item {
            id: None,
            name: valid.name,
            category: valid.category,
            description: valid.description,
            location: valid.location,
            date,
            image,
        };

        let inserted = self.repo.insert(item).await;
        match &inserted {
            Ok(_) => info!("Item report stored"),
            Err(e) => error!("Failed to store item report: {e}"),
        }
        let inserted = inserted?;

        Ok(ReportItemResponse {
            message: format!("{} item reported successfully", self.kind.label()),
            item: ItemResponse::from_item(inserted),
        })
    }

    #[instrument(skip(self), fields(kind = self.kind.label()))]
    async fn list_items(&self) -> Result<Vec<ItemResponse>, ApiError> {
        let items = self.repo.list_newest_first().await;
        match &items {
            Ok(items) => info!("Fetched {} {} items", items.len(), self.kind.label()),
            Err(e) => error!("Failed to fetch items: {e}"),
        }
        let items = items?;
        Ok(items.into_iter().map(ItemResponse::from_item).collect())
    }
}
