use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::models::{Entry, User};

/// Errors from the credential and entry stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// User records keyed by a unique username.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fails with `Conflict` when the username is taken.
    async fn create_user(&self, username: &str, password: &str) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Union `permissions` into the user's set. Fails with `NotFound` for an unknown user.
    async fn add_permissions(&self, username: &str, permissions: &[String]) -> Result<User, StoreError>;
}

/// Entry records in store order.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Entry>, StoreError>;

    /// Entries whose title or content contains `query` literally.
    async fn search(&self, query: &str) -> Result<Vec<Entry>, StoreError>;

    async fn insert(&self, title: &str, content: &str, owner_user_id: Uuid) -> Result<Entry, StoreError>;

    /// Overwrites title and content. `None` when no entry has `id`.
    async fn update(&self, id: Uuid, title: &str, content: &str) -> Result<Option<Entry>, StoreError>;

    /// `false` when no entry has `id`.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub type CredentialStoreState = Arc<dyn CredentialStore>;
pub type EntryStoreState = Arc<dyn EntryStore>;
