//! Authentication API integration tests
//!
//! Login, the access guard and the identity endpoint, end to end.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use postgate::backend::auth::Claims;
use postgate::backend::auth::TokenCodec;
use postgate::backend::server::SigningSecret;

use crate::common::{
    auth_header, create_test_app, login_token, test_codec, TEST_LOGIN, TEST_PASSWORD, TEST_USER_ID,
};
use crate::{assert_contains, assert_error_response};

#[tokio::test]
async fn test_login_success() {
    let app = create_test_app();

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "login": TEST_LOGIN,
            "password": TEST_PASSWORD
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["expires_in"], 21_600);
}

#[tokio::test]
async fn test_login_token_carries_identity() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let claims = test_codec().verify(&token).unwrap();
    assert_eq!(claims.user_id, TEST_USER_ID);
    assert_eq!(claims.login, TEST_LOGIN);
    assert_eq!(claims.exp - claims.iat, 21_600);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = create_test_app();

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "login": TEST_LOGIN, "password": "wrongpassword" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = create_test_app();

    let unknown = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "login": "mallory", "password": TEST_PASSWORD }))
        .await;
    let wrong = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "login": TEST_LOGIN, "password": "nope" }))
        .await;

    assert_eq!(unknown.status_code(), wrong.status_code());
    assert_eq!(unknown.text(), wrong.text());
}

#[tokio::test]
async fn test_login_empty_password_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "login": TEST_LOGIN, "password": "" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "invalid credentials");
}

#[tokio::test]
async fn test_login_invalid_body() {
    let app = create_test_app();

    let missing_field = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "login": TEST_LOGIN }))
        .await;
    assert_error_response!(missing_field, StatusCode::BAD_REQUEST, "invalid body");

    let not_json = app.server.post("/auth/login").text("login=alice").await;
    assert_error_response!(not_json, StatusCode::BAD_REQUEST, "invalid body");
}

#[tokio::test]
async fn test_protected_route_with_token() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let response = app.server.get("/api/data").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["posts"].is_array());
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = create_test_app();

    let response = app.server.get("/api/data").await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_altered_token() {
    let app = create_test_app();
    let mut token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;
    let last = token.pop().unwrap();
    token.push(if last == 'A' { 'B' } else { 'A' });

    let response = app.server.get("/api/data").authorization_bearer(&token).await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_protected_route_rejections_are_uniform() {
    let app = create_test_app();
    let codec = test_codec();
    let now = Utc::now();

    let expired = codec
        .issue(&Claims::new(TEST_USER_ID, TEST_LOGIN, now - Duration::hours(7), Duration::hours(6)).unwrap())
        .unwrap();
    let foreign = TokenCodec::new(&SigningSecret::new("someone-else").unwrap())
        .issue(&Claims::new(TEST_USER_ID, TEST_LOGIN, now, Duration::hours(6)).unwrap())
        .unwrap();

    let baseline = app.server.get("/api/data").await.text();

    for header in [
        auth_header(&expired),
        auth_header(&foreign),
        auth_header("not-a-token"),
        format!("Basic {}", "YWxpY2U6cGFzc3dvcmQxMjM="),
        "Bearer".to_string(),
    ] {
        let response = app
            .server
            .get("/api/data")
            .add_header(AUTHORIZATION, HeaderValue::from_str(&header).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "header: {}", header);
        assert_eq!(response.text(), baseline, "header: {}", header);
    }
}

#[tokio::test]
async fn test_me_returns_token_identity() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let response = app.server.get("/api/me").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_id"], TEST_USER_ID);
    assert_eq!(body["login"], TEST_LOGIN);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();

    let response = app.server.get("/api/nothing-here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "not found");
}
