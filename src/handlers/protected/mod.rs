// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Route Prefix: /api/*
// Middleware: authenticate (401) → require_permission (403, per route) → handler
pub mod auth;
pub mod entry;

pub use auth::*;
pub use entry::*;
