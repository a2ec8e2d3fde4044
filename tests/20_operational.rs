mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{body, test_config, Authed, FailingEntryStore, TestServer};
use entry_api::database::{MemoryCredentialStore, MemoryEntryStore};
use reqwest::StatusCode;
use serde_json::json;

async fn server_with_failing_entries() -> Result<TestServer> {
    TestServer::spawn_with(
        test_config(),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(FailingEntryStore),
    )
    .await
}

#[tokio::test]
async fn registration_can_be_disabled() -> Result<()> {
    let mut config = test_config();
    config.security.allow_registration = false;
    let server = TestServer::spawn_with(
        config,
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(MemoryEntryStore::new()),
    )
    .await?;

    let res = server
        .client
        .post(server.url("/auth/register"))
        .json(&json!({"username": "username1", "password": "password1"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(body(res).await?["code"], "FORBIDDEN");

    // Nothing was stored, so the same credentials cannot log in
    let res = server
        .client
        .post(server.url("/auth/login"))
        .json(&json!({"username": "username1", "password": "password1"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn health_reports_unreachable_store() -> Result<()> {
    let server = server_with_failing_entries().await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body(res).await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    Ok(())
}

#[tokio::test]
async fn store_failure_is_a_generic_server_error() -> Result<()> {
    let server = server_with_failing_entries().await?;
    let user = server.create_user("username1", "password1").await?;
    let token = server.token_for(&user.username)?;

    let res = server.client.get(server.url("/api/entry")).bearer(&token).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body(res).await?;
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    let message = body["message"].as_str().unwrap_or_default().to_lowercase();
    assert!(!message.contains("pool"), "leaked store detail: {}", message);
    Ok(())
}
