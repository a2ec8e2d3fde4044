// handlers/protected/auth/whoami.rs - GET /api/auth/whoami handler

use axum::Extension;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub id: Uuid,
    pub username: String,
    pub permissions: BTreeSet<String>,
}

/// GET /api/auth/whoami - The resolved user behind the bearer token
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> ApiResult<WhoAmI> {
    Ok(ApiResponse::success(WhoAmI {
        id: user.id,
        username: user.username,
        permissions: user.permissions,
    }))
}
