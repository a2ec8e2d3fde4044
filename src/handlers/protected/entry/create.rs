// handlers/protected/entry/create.rs - POST /api/entry handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::database::models::Entry;
use crate::handlers::utils::json_body;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// POST /api/entry - Create an entry owned by the caller (requires `entry.create`)
pub async fn entry_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Entry> {
    let body = json_body(payload)?;
    let entry = state.entry_service().create(&body, user.id).await?;
    Ok(ApiResponse::created(entry))
}
