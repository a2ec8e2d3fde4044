use anyhow::{bail, Result};
use serde_json::json;

use crate::cli::AdminContext;
use crate::database::CredentialStore;

pub async fn handle(username: &str, ctx: &AdminContext) -> Result<()> {
    if ctx.store.find_by_username(username).await?.is_none() {
        bail!("user '{}' not found", username);
    }

    let token = ctx.tokens.issue(username)?;
    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "expires_in": ctx.tokens.expires_in(),
            }))?
        );
    } else {
        println!("{}", token);
    }
    Ok(())
}
