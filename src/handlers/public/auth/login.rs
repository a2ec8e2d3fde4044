// handlers/public/auth/login.rs - POST /auth/login handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::handlers::utils::json_body;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::LoginResponse;
use crate::state::AppState;

/**
 * POST /auth/login - Authenticate user and receive a bearer token
 *
 * Expected Input:
 * ```json
 * { "username": "string", "password": "string" }
 * ```
 *
 * Expected Output (Success):
 * ```json
 * {
 *   "success": true,
 *   "data": {
 *     "token": "eyJhbGciOiJIUzI1NiI...",
 *     "expires_in": 604800,
 *     "user": { "id": "...", "username": "username1", "permissions": [] }
 *   }
 * }
 * ```
 */
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let body = json_body(payload)?;
    let login = state.user_service().login(&body).await?;
    Ok(ApiResponse::success(login))
}
