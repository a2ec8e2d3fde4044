use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::error::ApiError;

/// Permission a route demands, fixed when the route is built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequiredPermission(pub &'static str);

/// Per-route guard. Runs after `authenticate` and before any store access.
pub async fn require_permission(
    State(RequiredPermission(permission)): State<RequiredPermission>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    if !user.has_permission(permission) {
        tracing::warn!("User '{}' lacks permission '{}'", user.username, permission);
        return Err(ApiError::forbidden(format!("Missing permission '{}'", permission)));
    }

    Ok(next.run(request).await)
}
