use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::database::models::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the credential store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub permissions: BTreeSet<String>,
}

impl AuthUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            permissions: user.permissions,
        }
    }
}

/// Bearer-token authentication for every protected route.
///
/// Missing header, bad token and a token for a user that no longer exists
/// all fail the same way with 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Rejected {} {}: no bearer token", request.method(), request.uri().path());
        unauthenticated()
    })?;

    let claims = state.tokens.verify(token).map_err(|_| {
        tracing::warn!("Rejected {} {}: invalid token", request.method(), request.uri().path());
        unauthenticated()
    })?;

    let user = state
        .users
        .find_by_username(&claims.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Rejected token for unknown user '{}'", claims.username);
            unauthenticated()
        })?;

    tracing::debug!("Authenticated user '{}'", user.username);

    request.extensions_mut().insert(AuthUser::from(user));
    Ok(next.run(request).await)
}

fn unauthenticated() -> ApiError {
    ApiError::unauthorized("Authentication required")
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
    }

    #[test]
    fn rejects_missing_or_malformed_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers("Basic abc")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers("abc")), None);
    }

    #[test]
    fn permissions_are_exact_set_members() {
        let mut user = User::new("username1", "digest");
        user.grant(["entry.create"]);
        let user = AuthUser::from(user);
        assert!(user.has_permission("entry.create"));
        assert!(!user.has_permission("entry.update"));
        assert!(!user.has_permission("entry.*"));
    }
}
