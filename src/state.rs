use std::sync::Arc;

use crate::auth::{TokenError, TokenService};
use crate::config::AppConfig;
use crate::database::{
    CredentialStoreState, DatabaseError, DatabaseManager, EntryStoreState, MemoryCredentialStore,
    MemoryEntryStore, PgStore,
};
use crate::services::{EntryService, UserService};

/// Shared per-process dependencies handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub users: CredentialStoreState,
    pub entries: EntryStoreState,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl AppState {
    pub fn new(
        config: AppConfig,
        users: CredentialStoreState,
        entries: EntryStoreState,
    ) -> Result<Self, TokenError> {
        let tokens = TokenService::from_config(&config.security)?;
        Ok(Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            users,
            entries,
        })
    }

    /// Process-local stores; nothing survives a restart
    pub fn in_memory(config: AppConfig) -> Result<Self, TokenError> {
        Self::new(
            config,
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(MemoryEntryStore::new()),
        )
    }

    /// Postgres stores when `DATABASE_URL` is configured, memory otherwise
    pub async fn from_config(config: AppConfig) -> Result<Self, StateError> {
        if config.database.url.is_none() {
            tracing::warn!("DATABASE_URL not set, using in-memory stores");
            return Ok(Self::in_memory(config)?);
        }

        let pool = DatabaseManager::connect(&config.database).await?;
        let store = Arc::new(PgStore::new(pool));
        Ok(Self::new(config, store.clone(), store)?)
    }

    pub fn entry_service(&self) -> EntryService {
        EntryService::new(self.entries.clone())
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone(), self.tokens.clone(), self.config.security.bcrypt_cost)
    }
}
