use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{user::UserRow, Entry, User};
use super::store::{CredentialStore, EntryStore, StoreError};

const USER_COLUMNS: &str = "id, username, password, permissions";
const ENTRY_COLUMNS: &str = "id, title, content, owner_user_id";

/// Postgres-backed credential and entry stores sharing one pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn create_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let query = format!(
            "INSERT INTO users (id, username, password, permissions) VALUES ($1, $2, $3, '{{}}') RETURNING {}",
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(Uuid::new_v4())
            .bind(username)
            .bind(password)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    StoreError::Conflict(format!("username '{}'", username))
                }
                other => StoreError::Sqlx(other),
            })?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }

    async fn add_permissions(&self, username: &str, permissions: &[String]) -> Result<User, StoreError> {
        let query = format!(
            r#"
            UPDATE users
            SET permissions = ARRAY(SELECT DISTINCT unnest(permissions || $2::text[]) ORDER BY 1)
            WHERE username = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .bind(permissions)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::from)
            .ok_or_else(|| StoreError::NotFound(format!("user '{}'", username)))
    }
}

#[async_trait]
impl EntryStore for PgStore {
    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let query = format!("SELECT {} FROM entries ORDER BY seq", ENTRY_COLUMNS);
        Ok(sqlx::query_as::<_, Entry>(&query).fetch_all(&self.pool).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Entry>, StoreError> {
        // strpos keeps the match literal: no LIKE wildcards or regex metacharacters
        let sql = format!(
            "SELECT {} FROM entries WHERE strpos(title, $1) > 0 OR strpos(content, $1) > 0 ORDER BY seq",
            ENTRY_COLUMNS
        );
        Ok(sqlx::query_as::<_, Entry>(&sql).bind(query).fetch_all(&self.pool).await?)
    }

    async fn insert(&self, title: &str, content: &str, owner_user_id: Uuid) -> Result<Entry, StoreError> {
        let query = format!(
            "INSERT INTO entries (id, title, content, owner_user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            ENTRY_COLUMNS
        );

        Ok(sqlx::query_as::<_, Entry>(&query)
            .bind(Uuid::new_v4())
            .bind(title)
            .bind(content)
            .bind(owner_user_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(&self, id: Uuid, title: &str, content: &str) -> Result<Option<Entry>, StoreError> {
        let query = format!(
            "UPDATE entries SET title = $2, content = $3 WHERE id = $1 RETURNING {}",
            ENTRY_COLUMNS
        );

        Ok(sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(title)
            .bind(content)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
