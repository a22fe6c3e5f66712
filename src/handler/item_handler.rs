use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::BytesMut;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::dto::item_dto::ItemSubmission;
use crate::model::item::ItemKind;
use crate::service::item_service::{ItemService, ItemServiceImpl};
use crate::util::error::ApiError;
use crate::util::upload::{UploadError, UploadedImage};

pub async fn report_item_handler(
    State(service): State<Arc<ItemServiceImpl>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    info!("Report {} item handler called", service.kind.label());
    let submission = read_item_submission(multipart, service.kind).await?;
    let created = service.report_item(submission).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_items_handler(
    State(service): State<Arc<ItemServiceImpl>>,
) -> Result<impl IntoResponse, ApiError> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Walks the multipart form and collects the item fields. The image field is
/// validated against the upload policy as it is read; everything else is
/// deferred to `ItemSubmission::validate`.
pub async fn read_item_submission(
    mut multipart: Multipart,
    kind: ItemKind,
) -> Result<ItemSubmission, ApiError> {
    let mut submission = ItemSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("Processing multipart field: {}", name);

        if name == "image" {
            if submission.image.is_some() {
                return Err(ApiError::InvalidUpload(
                    "Only one image may be attached per report".to_string(),
                ));
            }
            let content_type =
                field.content_type().map(|s| s.to_string()).unwrap_or_default();
            if !UploadedImage::allowed_type(&content_type) {
                // Reject on the declared type before buffering the payload.
                warn!("Rejected upload with content type '{}'", content_type);
                return Err(UploadError::UnsupportedType(content_type).into());
            }

            let mut buf = BytesMut::new();
            let mut stream = field;
            while let Some(chunk) = stream.chunk().await.map_err(|e| {
                ApiError::Validation(format!("Failed to read image data: {}", e))
            })? {
                buf.extend_from_slice(&chunk);
            }
            info!("Received image upload ({} bytes)", buf.len());
            submission.image = Some(UploadedImage::new(content_type, buf.to_vec())?);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read field '{}': {}", name, e)))?;

        match name.as_str() {
            "itemName" => submission.item_name = Some(value),
            "category" => submission.category = Some(value),
            "description" => submission.description = Some(value),
            "location" => submission.location = Some(value),
            date_field if date_field == kind.date_field() => submission.date = Some(value),
            other => debug!("Ignoring unknown field: {}", other),
        }
    }

    Ok(submission)
}
