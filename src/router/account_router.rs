use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use crate::handler::account_handler::{login_handler, register_handler};
use crate::service::account_service::AccountServiceImpl;

pub fn account_router(service: Arc<AccountServiceImpl>) -> Router {
    Router::new()
        .route("/api/register", post(register_handler))
        .route("/api/login", post(login_handler))
        .with_state(service)
}
