pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::{MemoryCredentialStore, MemoryEntryStore};
pub use postgres::PgStore;
pub use store::{CredentialStore, CredentialStoreState, EntryStore, EntryStoreState, StoreError};
