use base64::{engine::general_purpose, Engine as _};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::item::{Category, Item};
use crate::util::upload::UploadedImage;

/// One item report as parsed off the multipart form, before validation.
/// Every field is optional at this stage; `validate` decides what is missing.
#[derive(Debug, Clone, Default)]
pub struct ItemSubmission {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub image: Option<UploadedImage>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ItemValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid category '{0}'. Must be one of electronics, documents, accessories, books, others")]
    InvalidCategory(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// A submission that passed validation. The date stays optional; the service
/// defaults it to the time of the report.
#[derive(Debug, Clone)]
pub struct ValidItem {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    pub date: Option<chrono::DateTime<Utc>>,
    pub image: Option<UploadedImage>,
}

impl ItemSubmission {
    /// Checks fields in form order and stops at the first failure.
    pub fn validate(self) -> Result<ValidItem, ItemValidationError> {
        let name = required_text(self.item_name, "itemName")?;
        let category_raw = required_text(self.category, "category")?;
        let category = Category::parse(&category_raw)
            .ok_or(ItemValidationError::InvalidCategory(category_raw))?;
        let description = required_text(self.description, "description")?;
        let location = required_text(self.location, "location")?;
        let date = match self.date {
            Some(raw) => parse_client_date(&raw)?,
            None => None,
        };

        Ok(ValidItem {
            name,
            category,
            description,
            location,
            date,
            image: self.image,
        })
    }
}

/// Present means non-blank; a field submitted as whitespace counts as missing.
fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ItemValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ItemValidationError::MissingField(field)),
    }
}

/// Dates arrive from browser forms either as plain `YYYY-MM-DD` (date inputs)
/// or as full RFC 3339 timestamps. A blank value means the field was left
/// untouched and counts as absent.
fn parse_client_date(
    raw: &str,
) -> Result<Option<chrono::DateTime<Utc>>, ItemValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(date_time) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(date_time.with_timezone(&Utc)));
    }

    if let Some(date_time) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
    {
        return Ok(Some(date_time));
    }

    Err(ItemValidationError::InvalidDate(trimmed.to_string()))
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    /// Base64 of the stored bytes, ready for a data URI on the client.
    pub data: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    /// RFC 3339 timestamp.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
}

impl ItemResponse {
    pub fn from_item(item: Item) -> Self {
        let image = item.image.map(|image| ImageResponse {
            data: general_purpose::STANDARD.encode(&image.data.bytes),
            content_type: image.content_type,
        });
        ItemResponse {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: item.name,
            category: item.category,
            description: item.description,
            location: item.location,
            date: item.date.to_chrono().to_rfc3339(),
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportItemResponse {
    pub message: String,
    pub item: ItemResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> ItemSubmission {
        ItemSubmission {
            item_name: Some("Black Wallet".to_string()),
            category: Some("accessories".to_string()),
            description: Some("Leather wallet with a broken zip".to_string()),
            location: Some("Main library, second floor".to_string()),
            date: Some("2024-01-01".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_validate_full_submission() {
        let valid = full_submission().validate().expect("submission should validate");
        assert_eq!(valid.name, "Black Wallet");
        assert_eq!(valid.category, Category::Accessories);
        assert_eq!(valid.location, "Main library, second floor");
        assert!(valid.image.is_none());
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let mut submission = full_submission();
        submission.item_name = None;
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::MissingField("itemName")
        );
    }

    #[test]
    fn test_validate_treats_blank_field_as_missing() {
        let mut submission = full_submission();
        submission.location = Some("   ".to_string());
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::MissingField("location")
        );
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let mut submission = full_submission();
        submission.category = Some("furniture".to_string());
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::InvalidCategory("furniture".to_string())
        );
    }

    #[test]
    fn test_validate_checks_fields_in_form_order() {
        let mut submission = full_submission();
        submission.item_name = None;
        submission.category = Some("furniture".to_string());
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::MissingField("itemName")
        );
    }

    #[test]
    fn test_date_only_value_parses_to_utc_midnight() {
        let valid = full_submission().validate().expect("submission should validate");
        let date = valid.date.expect("date should be present");
        assert_eq!(date.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_rfc3339_date_is_accepted() {
        let mut submission = full_submission();
        submission.date = Some("2024-06-15T13:45:00Z".to_string());
        let valid = submission.validate().expect("submission should validate");
        assert_eq!(
            valid.date.expect("date should be present").to_rfc3339(),
            "2024-06-15T13:45:00+00:00"
        );
    }

    #[test]
    fn test_blank_date_counts_as_absent() {
        let mut submission = full_submission();
        submission.date = Some("  ".to_string());
        let valid = submission.validate().expect("submission should validate");
        assert!(valid.date.is_none());
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let mut submission = full_submission();
        submission.date = Some("yesterday".to_string());
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::InvalidDate("yesterday".to_string())
        );
    }

    #[test]
    fn test_response_encodes_image_as_base64() {
        use bson::spec::BinarySubtype;
        use bson::Binary;

        use crate::model::item::ItemImage;

        let bytes = vec![0x89u8, 0x50, 0x4e, 0x47];
        let item = Item {
            id: Some(bson::oid::ObjectId::new()),
            name: "Phone".to_string(),
            category: Category::Electronics,
            description: "Cracked screen".to_string(),
            location: "Cafeteria".to_string(),
            date: bson::DateTime::now(),
            image: Some(ItemImage {
                data: Binary { subtype: BinarySubtype::Generic, bytes: bytes.clone() },
                content_type: "image/png".to_string(),
            }),
        };

        let response = ItemResponse::from_item(item);
        let image = response.image.expect("image should be present");
        assert_eq!(image.data, general_purpose::STANDARD.encode(&bytes));
        assert_eq!(image.content_type, "image/png");
        assert_eq!(response.id.len(), 24);
    }
}
