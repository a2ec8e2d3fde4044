// handlers/mod.rs - Two security tiers
//
// Public (no auth) → Protected (bearer token + per-route permission)
pub mod public; // /auth/*
pub mod protected; // /api/*
pub mod utils;
