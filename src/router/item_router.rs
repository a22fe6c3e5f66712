use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handler::item_handler::{list_items_handler, report_item_handler};
use crate::model::item::ItemKind;
use crate::service::item_service::ItemServiceImpl;
use crate::util::upload::MAX_IMAGE_BYTES;

/// Routes for one item registry; the service's bound kind decides the path.
pub fn item_router(service: Arc<ItemServiceImpl>) -> Router {
    let path = match service.kind {
        ItemKind::Lost => "/api/lost-items",
        ItemKind::Found => "/api/found-items",
    };

    Router::new()
        .route(path, get(list_items_handler).post(report_item_handler))
        // Above the image ceiling so oversized uploads reach the upload
        // validator and get its message instead of a bare 413.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 1024 * 1024))
        .with_state(service)
}
