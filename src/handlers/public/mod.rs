// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition: register an account, then log in for a bearer token.
pub mod auth;

pub use auth::*;
