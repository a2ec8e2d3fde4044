// handlers/protected/entry/update.rs - POST /api/entry/:id handler

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

use crate::database::models::Entry;
use crate::handlers::utils::json_body;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/entry/:id - Overwrite title and content (requires `entry.update`)
///
/// 400 for an invalid body takes precedence over 404 for a missing id.
pub async fn entry_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Entry> {
    let body = json_body(payload)?;
    let entry = state.entry_service().update(&id, &body).await?;
    Ok(ApiResponse::success(entry))
}
