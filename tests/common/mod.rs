#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use entry_api::auth::MIN_COST;
use entry_api::config::AppConfig;
use entry_api::database::models::{Entry, User};
use entry_api::database::{
    CredentialStoreState, EntryStore, EntryStoreState, MemoryCredentialStore, MemoryEntryStore,
    StoreError,
};
use entry_api::services::Credentials;
use entry_api::AppState;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use uuid::Uuid;

/// A router served on an ephemeral port with fresh in-memory stores
pub struct TestServer {
    pub base_url: String,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(
            test_config(),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(MemoryEntryStore::new()),
        )
        .await
    }

    pub async fn spawn_with(config: AppConfig, users: CredentialStoreState, entries: EntryStoreState) -> Result<Self> {
        let state = AppState::new(config, users, entries)?;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind ephemeral port")?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let app = entry_api::app(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { base_url, state, client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a user through the service, bypassing the registration route
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        Ok(self.state.user_service().create(&credentials).await?)
    }

    pub async fn grant(&self, username: &str, permissions: &[&str]) -> Result<User> {
        let permissions: Vec<String> = permissions.iter().map(|p| p.to_string()).collect();
        Ok(self.state.user_service().add_permissions(username, &permissions).await?)
    }

    pub fn token_for(&self, username: &str) -> Result<String> {
        Ok(self.state.tokens.issue(username)?)
    }

    /// Store an entry directly, bypassing the API
    pub async fn create_entry(&self, title: &str, content: &str, owner: &User) -> Result<Entry> {
        Ok(self.state.entries.insert(title, content, owner.id).await?)
    }
}

/// Development settings with request logging off and the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;
    config.security.bcrypt_cost = MIN_COST;
    config
}

/// Entry store whose backend is always unreachable
pub struct FailingEntryStore;

fn unreachable() -> StoreError {
    StoreError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EntryStore for FailingEntryStore {
    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        Err(unreachable())
    }

    async fn search(&self, _query: &str) -> Result<Vec<Entry>, StoreError> {
        Err(unreachable())
    }

    async fn insert(&self, _title: &str, _content: &str, _owner_user_id: Uuid) -> Result<Entry, StoreError> {
        Err(unreachable())
    }

    async fn update(&self, _id: Uuid, _title: &str, _content: &str) -> Result<Option<Entry>, StoreError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, StoreError> {
        Err(unreachable())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unreachable())
    }
}

/// A user with a valid token and no permissions
pub struct Session {
    pub user: User,
    pub token: String,
}

pub async fn session(server: &TestServer) -> Result<Session> {
    let user = server.create_user("username1", "password1").await?;
    let token = server.token_for(&user.username)?;
    Ok(Session { user, token })
}

pub trait Authed {
    fn bearer(self, token: &str) -> Self;
}

impl Authed for RequestBuilder {
    fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }
}

pub async fn body(res: Response) -> Result<Value> {
    Ok(res.json::<Value>().await?)
}

/// Syntactically valid id that no entry has
pub fn missing_id() -> String {
    Uuid::new_v4().to_string()
}
