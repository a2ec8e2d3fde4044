use serde_json::Value;
use uuid::Uuid;

use super::validation::required_strings;
use crate::database::{models::Entry, EntryStoreState};
use crate::error::ApiError;

/// Validated create/update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub title: String,
    pub content: String,
}

impl EntryInput {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let [title, content] = required_strings(body, ["title", "content"], "Invalid entry")?;
        Ok(Self { title, content })
    }
}

/// Entry CRUD and search. Permission checks happen upstream in the router.
pub struct EntryService {
    store: EntryStoreState,
}

impl EntryService {
    pub fn new(store: EntryStoreState) -> Self {
        Self { store }
    }

    /// All entries for an empty query, otherwise literal substring matches
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Entry>, ApiError> {
        match query {
            Some(q) if !q.is_empty() => Ok(self.store.search(q).await?),
            _ => Ok(self.store.list().await?),
        }
    }

    pub async fn create(&self, body: &Value, owner_user_id: Uuid) -> Result<Entry, ApiError> {
        let input = EntryInput::from_json(body)?;
        let entry = self.store.insert(&input.title, &input.content, owner_user_id).await?;
        tracing::info!("Created entry {} for user {}", entry.id, owner_user_id);
        Ok(entry)
    }

    /// Validation runs before the existence check.
    pub async fn update(&self, id: &str, body: &Value) -> Result<Entry, ApiError> {
        let input = EntryInput::from_json(body)?;
        let id = parse_id(id)?;

        let entry = self
            .store
            .update(id, &input.title, &input.content)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Updated entry {}", entry.id);
        Ok(entry)
    }

    pub async fn delete(&self, id: &str) -> Result<Uuid, ApiError> {
        let id = parse_id(id)?;
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Deleted entry {}", id);
        Ok(id)
    }
}

/// An id that does not parse cannot name a stored entry, so it is a 404.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(format!("Entry '{}' not found", id)))
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Entry '{}' not found", id))
}
