use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::dto::account_dto::{LoginRequest, RegisterRequest};
use crate::service::account_service::{AccountService, AccountServiceImpl};
use crate::util::error::ApiError;

pub async fn register_handler(
    State(service): State<Arc<AccountServiceImpl>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login_handler(
    State(service): State<Arc<AccountServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service.login(payload).await?;
    Ok(Json(response))
}
