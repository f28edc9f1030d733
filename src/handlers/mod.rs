/// HTTP request handlers
use crate::domain::Health;
use crate::errors::ApiError;
use crate::services::UserRequestService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_requests: Arc<UserRequestService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub external_id: String,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Submit a user request; the stored body is echoed back
pub async fn create_user_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidInput(rejection.body_text())
        }
    })?;
    let stored = state.user_requests.submit(raw).await?;
    Ok(Json(stored))
}

/// Get one stored user request
pub async fn get_user_request(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let stored = state.user_requests.get(&id).await?;
    Ok(Json(stored))
}

/// List stored user requests
pub async fn list_user_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let items = state.user_requests.list().await?;
    Ok(Json(items))
}

/// Delete one stored user request
pub async fn delete_user_request(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Deleted>>, ApiError> {
    state.user_requests.delete(&id).await?;
    Ok(Json(SuccessResponse::new(Deleted { external_id: id })))
}
