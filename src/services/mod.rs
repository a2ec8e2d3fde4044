pub mod entry_service;
pub mod user_service;
pub mod validation;

pub use entry_service::{EntryInput, EntryService};
pub use user_service::{Credentials, LoginResponse, UserService};
