use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::validation::required_strings;
use crate::auth::{hash_password, verify_password, TokenService};
use crate::database::{models::User, CredentialStoreState};
use crate::error::ApiError;

/// Validated username/password payload
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let [username, password] = required_strings(body, ["username", "password"], "Invalid credentials")?;
        Ok(Self { username, password })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct UserService {
    store: CredentialStoreState,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: CredentialStoreState, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// New accounts start with no permissions
    pub async fn register(&self, body: &Value) -> Result<User, ApiError> {
        let credentials = Credentials::from_json(body)?;
        let user = self.create(&credentials).await?;
        tracing::info!("Registered user '{}'", user.username);
        Ok(user)
    }

    /// Hash and store an account without going through the HTTP payload
    pub async fn create(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let digest = hash_password(&credentials.password, self.bcrypt_cost)?;
        Ok(self.store.create_user(&credentials.username, &digest).await?)
    }

    /// Unknown user and wrong password are indistinguishable to the caller
    pub async fn login(&self, body: &Value) -> Result<LoginResponse, ApiError> {
        let credentials = Credentials::from_json(body)?;

        let user = match self.store.find_by_username(&credentials.username).await? {
            Some(user) if self.password_matches(&credentials.password, &user) => user,
            _ => {
                tracing::warn!("Failed login for '{}'", credentials.username);
                return Err(ApiError::unauthorized("Invalid username or password"));
            }
        };

        let token = self.tokens.issue(&user.username)?;
        Ok(LoginResponse {
            token,
            expires_in: self.tokens.expires_in(),
            user,
        })
    }

    /// Union with the user's existing permissions
    pub async fn add_permissions(&self, username: &str, permissions: &[String]) -> Result<User, ApiError> {
        let user = self.store.add_permissions(username, permissions).await?;
        tracing::info!("Granted {:?} to '{}'", permissions, username);
        Ok(user)
    }

    fn password_matches(&self, password: &str, user: &User) -> bool {
        match verify_password(password, &user.password) {
            Ok(matched) => matched,
            Err(err) => {
                // Unreadable digest; refuse the login like a wrong password
                tracing::error!("Stored password for '{}' is unusable: {}", user.username, err);
                false
            }
        }
    }
}
