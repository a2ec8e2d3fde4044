// handlers/protected/entry/delete.rs - DELETE /api/entry/:id handler

use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// DELETE /api/entry/:id - Remove an entry (requires `entry.delete`)
pub async fn entry_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = state.entry_service().delete(&id).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
