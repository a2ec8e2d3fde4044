pub mod auth;
pub mod permission;
pub mod response;

pub use auth::{authenticate, AuthUser};
pub use permission::{require_permission, RequiredPermission};
pub use response::{ApiResponse, ApiResult};
