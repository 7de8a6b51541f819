mod common;

use std::time::Duration;

use auth::Claims;
use auth::TokenIssuer;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn create_user(app: &TestApp, username: &str, password: &str) -> reqwest::Response {
    app.post("/api/users")
        .json(&json!({
            "username": username,
            "password": password,
            "created_by": "admin",
            "modified_by": "admin"
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn login(app: &TestApp, username: &str, password: &str) -> reqwest::Response {
    app.post("/api/users/login")
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = create_user(&app, "nicola", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["username"], "nicola");
    assert!(body["result"]["id"].is_i64());
    assert!(body["result"]["created_at"].is_string());
    assert!(body["result"].get("password").is_none());

    // Stored hashed
    let stored_hash = app.store.with(|store| store.users[0].password_hash.clone());
    assert_ne!(stored_hash, "pass_word!");
    assert!(stored_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_create_user_duplicate_username_ignores_case() {
    let app = TestApp::spawn().await;
    create_user(&app, "nicola", "pass_word!").await;

    let response = create_user(&app, "Nicola", "another").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("already taken"));
    assert_eq!(app.store.with(|store| store.users.len()), 1);
}

#[tokio::test]
async fn test_create_user_invalid_username() {
    let app = TestApp::spawn().await;

    let response = create_user(&app, "no spaces", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = create_user(&app, "ab", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_empty_password() {
    let app = TestApp::spawn().await;

    let response = create_user(&app, "nicola", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = TestApp::spawn().await;
    create_user(&app, "nicola", "pass_word!").await;

    let response = login(&app, "nicola", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["result"]["token"].as_str().unwrap().to_string();

    let claims = app.token_issuer.verify(&token).expect("Token should verify");
    assert_eq!(claims.username, "nicola");

    let response = app
        .get("/api/categories")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::spawn().await;
    create_user(&app, "nicola", "pass_word!").await;

    let wrong_password = login(&app, "nicola", "wrong").await;
    let unknown_user = login(&app, "ghost", "pass_word!").await;
    let malformed_user = login(&app, "x", "pass_word!").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(malformed_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();
    let malformed_user: serde_json::Value = malformed_user.json().await.unwrap();

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(unknown_user, malformed_user);
    assert_eq!(wrong_password["error"], "Username or password incorrect");
}

#[tokio::test]
async fn test_token_from_another_key_is_rejected() {
    let app = TestApp::spawn().await;

    let foreign = TokenIssuer::generate().expect("Failed to generate issuer");
    let token = foreign.issue("nicola").unwrap();

    let response = app
        .get("/api/books")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;

    let mut claims = Claims::for_identity("nicola", Duration::from_secs(60));
    claims.iat -= 7200;
    claims.exp -= 7200;
    let token = app.token_issuer.sign(&claims).unwrap();

    let response = app
        .get("/api/books")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_and_list_users() {
    let app = TestApp::spawn().await;
    let response = create_user(&app, "nicola", "pass_word!").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["result"]["id"].as_i64().unwrap();
    create_user(&app, "maria", "pass_word!").await;

    let response = app
        .get(&format!("/api/users/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["result"]["username"], "nicola");

    let response = app
        .get("/api/users")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let users = body["result"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn test_update_user_changes_credentials() {
    let app = TestApp::spawn().await;
    let response = create_user(&app, "nicola", "pass_word!").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["result"]["id"].as_i64().unwrap();

    let response = app
        .put(&format!("/api/users/{}", id))
        .json(&json!({
            "username": "nicola_b",
            "password": "new_password",
            "modified_by": "nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["result"]["username"], "nicola_b");
    assert_eq!(body["result"]["modified_by"], "nicola");

    assert_eq!(
        login(&app, "nicola_b", "pass_word!").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        login(&app, "nicola_b", "new_password").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_update_user_username_taken() {
    let app = TestApp::spawn().await;
    create_user(&app, "nicola", "pass_word!").await;
    let response = create_user(&app, "maria", "pass_word!").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["result"]["id"].as_i64().unwrap();

    let response = app
        .put(&format!("/api/users/{}", id))
        .json(&json!({ "username": "NICOLA", "password": "x" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .put("/api/users/404")
        .json(&json!({ "username": "nobody", "password": "x" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::spawn().await;
    let response = create_user(&app, "nicola", "pass_word!").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["result"]["id"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/users/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete(&format!("/api/users/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/not-a-number")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
