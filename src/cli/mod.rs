pub mod commands;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::{DatabaseManager, PgStore};
use crate::services::UserService;

#[derive(Parser)]
#[command(name = "entry-admin")]
#[command(about = "Administrative commands for the Entry API credential store")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "User account and permission management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Issue a bearer token for an existing user")]
    Token {
        username: String,
    },
}

/// Dependencies the commands operate on
pub struct AdminContext {
    pub store: Arc<PgStore>,
    pub users: UserService,
    pub tokens: Arc<TokenService>,
    pub json: bool,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    if config.database.url.is_none() {
        bail!("DATABASE_URL must be set; the in-memory store does not outlive a process");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    let tokens = Arc::new(TokenService::from_config(&config.security).context("JWT_SECRET must be set")?);
    let store = Arc::new(PgStore::new(pool));

    let ctx = AdminContext {
        users: UserService::new(store.clone(), tokens.clone(), config.security.bcrypt_cost),
        store,
        tokens,
        json: cli.json,
    };

    match cli.command {
        Commands::User { cmd } => commands::user::handle(cmd, &ctx).await,
        Commands::Token { username } => commands::token::handle(&username, &ctx).await,
    }
}
