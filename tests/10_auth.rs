mod common;

use anyhow::Result;
use common::{body, Authed, TestServer};
use reqwest::{Method, StatusCode};
use serde_json::json;

fn protected_routes() -> Vec<(Method, String)> {
    let id = common::missing_id();
    vec![
        (Method::GET, "/api/entry".to_string()),
        (Method::POST, "/api/entry".to_string()),
        (Method::POST, format!("/api/entry/{}", id)),
        (Method::DELETE, format!("/api/entry/{}", id)),
        (Method::POST, "/api/entry/123456789012".to_string()),
        (Method::DELETE, "/api/entry/123456789012".to_string()),
        (Method::GET, "/api/auth/whoami".to_string()),
    ]
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = TestServer::spawn().await?;
    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body(res).await?;
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn missing_token_is_unauthorized_everywhere() -> Result<()> {
    let server = TestServer::spawn().await?;
    let entry = json!({"title": "title1", "content": "content1"});

    for (method, path) in protected_routes() {
        let res = server
            .client
            .request(method.clone(), server.url(&path))
            .json(&entry)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
    }
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_unauthorized_everywhere() -> Result<()> {
    let server = TestServer::spawn().await?;
    let entry = json!({"title": "title1", "content": "content1"});

    for (method, path) in protected_routes() {
        let res = server
            .client
            .request(method.clone(), server.url(&path))
            .bearer("token")
            .json(&entry)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
        assert_eq!(body(res).await?["code"], "UNAUTHORIZED");
    }
    Ok(())
}

#[tokio::test]
async fn missing_and_bad_token_look_the_same() -> Result<()> {
    let server = TestServer::spawn().await?;

    let missing = server.client.get(server.url("/api/entry")).send().await?;
    let bad = server.client.get(server.url("/api/entry")).bearer("token").send().await?;
    assert_eq!(missing.status(), bad.status());
    assert_eq!(body(missing).await?, body(bad).await?);
    Ok(())
}

#[tokio::test]
async fn token_for_unknown_user_is_unauthorized() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("ghost")?;

    let res = server.client.get(server.url("/api/entry")).bearer(&token).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_from_another_secret_is_unauthorized() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.create_user("username1", "password1").await?;
    let foreign = entry_api::auth::TokenService::new("another-secret", chrono::Duration::hours(1))?;
    let token = foreign.issue("username1")?;

    let res = server.client.get(server.url("/api/entry")).bearer(&token).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn register_login_whoami() -> Result<()> {
    let server = TestServer::spawn().await?;
    let login = json!({"username": "username1", "password": "password1"});

    let res = server.client.post(server.url("/auth/register")).json(&login).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let registered = body(res).await?;
    assert_eq!(registered["data"]["username"], "username1");
    assert!(registered["data"].get("password").is_none());

    let res = server.client.post(server.url("/auth/login")).json(&login).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let token = body(res).await?["data"]["token"]
        .as_str()
        .map(str::to_string)
        .expect("token in login response");

    let res = server.client.get(server.url("/api/auth/whoami")).bearer(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let me = body(res).await?;
    assert_eq!(me["data"]["username"], "username1");
    assert_eq!(me["data"]["permissions"], json!([]));
    Ok(())
}

#[tokio::test]
async fn register_rejects_duplicates_and_missing_fields() -> Result<()> {
    let server = TestServer::spawn().await?;
    let login = json!({"username": "username1", "password": "password1"});

    server.client.post(server.url("/auth/register")).json(&login).send().await?;
    let res = server.client.post(server.url("/auth/register")).json(&login).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = server
        .client
        .post(server.url("/auth/register"))
        .json(&json!({"password": "password1"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(body(res).await?.get("username").is_some());
    Ok(())
}

#[tokio::test]
async fn login_rejects_wrong_password() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.create_user("username1", "password1").await?;

    let res = server
        .client
        .post(server.url("/auth/login"))
        .json(&json!({"username": "username1", "password": "wrong"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
