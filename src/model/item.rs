use bson::{oid::ObjectId, Binary, DateTime};
use serde::{Deserialize, Serialize};

/// Which of the two item registries a record belongs to. The registries are
/// identical in shape and live in separate collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub fn collection_name(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    /// Name of the kind-specific date field in the submission form.
    pub fn date_field(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lostDate",
            ItemKind::Found => "foundDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Lost => "Lost",
            ItemKind::Found => "Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Documents,
    Accessories,
    Books,
    Others,
}

impl Category {
    /// Accepts exactly the lowercase wire values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "electronics" => Some(Category::Electronics),
            "documents" => Some(Category::Documents),
            "accessories" => Some(Category::Accessories),
            "books" => Some(Category::Books),
            "others" => Some(Category::Others),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Documents => "documents",
            Category::Accessories => "accessories",
            Category::Books => "books",
            Category::Others => "others",
        }
    }
}

/// Image bytes embedded in the item document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemImage {
    pub data: Binary,
    #[serde(rename = "contentType")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    pub date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ItemImage>,
}
