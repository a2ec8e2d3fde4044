use anyhow::Result;
use clap::Subcommand;

use crate::cli::AdminContext;
use crate::database::{models::User, CredentialStore};
use crate::services::Credentials;
use crate::types::permissions;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user")]
    Add {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long = "grant", help = "Permission to grant, repeatable")]
        grant: Vec<String>,
    },

    #[command(about = "Grant permissions to an existing user")]
    Grant {
        username: String,
        #[arg(required = true)]
        permissions: Vec<String>,
    },

    #[command(about = "Show a user and its permissions")]
    Show { username: String },
}

pub async fn handle(cmd: UserCommands, ctx: &AdminContext) -> Result<()> {
    match cmd {
        UserCommands::Add { username, password, grant } => {
            let mut user = ctx.users.create(&Credentials { username, password }).await?;
            if !grant.is_empty() {
                warn_unknown(&grant);
                user = ctx.users.add_permissions(&user.username, &grant).await?;
            }
            print_user(&user, ctx.json)
        }
        UserCommands::Grant { username, permissions } => {
            warn_unknown(&permissions);
            let user = ctx.users.add_permissions(&username, &permissions).await?;
            print_user(&user, ctx.json)
        }
        UserCommands::Show { username } => match ctx.store.find_by_username(&username).await? {
            Some(user) => print_user(&user, ctx.json),
            None => anyhow::bail!("user '{}' not found", username),
        },
    }
}

fn warn_unknown(granted: &[String]) {
    for p in granted.iter().filter(|p| !permissions::ALL.contains(&p.as_str())) {
        eprintln!("warning: '{}' is not checked by any route", p);
    }
}

fn print_user(user: &User, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        let perms: Vec<&str> = user.permissions.iter().map(String::as_str).collect();
        println!("{}  {}  [{}]", user.id, user.username, perms.join(", "));
    }
    Ok(())
}
