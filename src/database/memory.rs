use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Entry, User};
use super::store::{CredentialStore, EntryStore, StoreError};

/// Process-local credential store for development and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<Vec<User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == username) {
            return Err(StoreError::Conflict(format!("username '{}'", username)));
        }
        let user = User::new(username, password);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn add_permissions(&self, username: &str, permissions: &[String]) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or_else(|| StoreError::NotFound(format!("user '{}'", username)))?;
        user.grant(permissions.iter().cloned());
        Ok(user.clone())
    }
}

/// Process-local entry store. Keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Entry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.matches(query)).cloned().collect())
    }

    async fn insert(&self, title: &str, content: &str, owner_user_id: Uuid) -> Result<Entry, StoreError> {
        let entry = Entry {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            owner_user_id,
        };
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: Uuid, title: &str, content: &str) -> Result<Option<Entry>, StoreError> {
        let mut entries = self.entries.write().await;
        Ok(entries.iter_mut().find(|e| e.id == id).map(|entry| {
            entry.title = title.to_string();
            entry.content = content.to_string();
            entry.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }
}
