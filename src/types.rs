//! Shared types used across the codebase

/// Permission names checked by the entry routes.
///
/// Each is independent: holding one never implies another.
pub mod permissions {
    pub const ENTRY_CREATE: &str = "entry.create";
    pub const ENTRY_UPDATE: &str = "entry.update";
    pub const ENTRY_DELETE: &str = "entry.delete";

    pub const ALL: &[&str] = &[ENTRY_CREATE, ENTRY_UPDATE, ENTRY_DELETE];
}
