// handlers/protected/entry/list.rs - GET /api/entry?query= handler

use axum::extract::{Query, State};

use crate::database::models::Entry;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/entry - List entries, optionally filtered by a literal substring
///
/// Authentication only; no permission is required to read. Unknown parameters
/// are ignored and the first `query` wins when it is repeated.
pub async fn entry_list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Vec<Entry>> {
    let query = params
        .iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.as_str());
    let entries = state.entry_service().search(query).await?;
    Ok(ApiResponse::success(entries))
}
