use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_user_id: Uuid,
}

impl Entry {
    /// Literal, case-sensitive substring match against title or content.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.content.contains(query)
    }
}
