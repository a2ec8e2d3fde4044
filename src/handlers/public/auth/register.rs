// handlers/public/auth/register.rs - POST /auth/register handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::utils::json_body;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /auth/register - Create an account with no permissions
///
/// Body: `{"username": "...", "password": "..."}`. 409 when the username is
/// taken, 403 when registration is disabled.
pub async fn register_post(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<User> {
    if !state.config.security.allow_registration {
        return Err(ApiError::forbidden("Registration is disabled"));
    }

    let body = json_body(payload)?;
    let user = state.user_service().register(&body).await?;
    Ok(ApiResponse::created(user))
}
