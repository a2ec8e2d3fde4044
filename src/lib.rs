pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{delete, get, post, MethodRouter},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::error::ApiError;
use crate::middleware::{authenticate, require_permission, ApiResponse, ApiResult, RequiredPermission};
use crate::types::permissions;

pub use crate::state::AppState;

/// Build the full router over `state`
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{auth, entry};

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami_get))
        // Listing needs authentication only
        .route(
            "/api/entry",
            guarded(permissions::ENTRY_CREATE, post(entry::entry_create)).get(entry::entry_list),
        )
        .route(
            "/api/entry/:id",
            guarded(permissions::ENTRY_UPDATE, post(entry::entry_update))
                .merge(guarded(permissions::ENTRY_DELETE, delete(entry::entry_delete))),
        )
        // Outermost: authentication runs before any permission guard
        .route_layer(from_fn_with_state(state, authenticate))
}

/// Attach a permission guard to the methods registered so far on `route`
fn guarded(permission: &'static str, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(from_fn_with_state(RequiredPermission(permission), require_permission))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    if let Err(e) = state.entries.health_check().await {
        tracing::error!("Health check failed: {}", e);
        return Err(ApiError::service_unavailable("Database unavailable"));
    }

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "database": "ok"
    })))
}
