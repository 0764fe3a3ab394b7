//! Posts API integration tests
//!
//! Creating posts through the guard, the JSON listing and the escaped HTML
//! page.

use axum::http::{header::CONTENT_SECURITY_POLICY, StatusCode};
use postgate::backend::posts::PostStore;
use postgate::shared::NewPost;

use crate::common::{create_test_app, login_token, TEST_LOGIN, TEST_PASSWORD};
use crate::{assert_contains, assert_error_response, assert_not_contains};

#[tokio::test]
async fn test_create_post_as_caller() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello", "content": "First!" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["post"]["author"], TEST_LOGIN);
    assert_eq!(body["post"]["title"], "Hello");
    assert_eq!(body["post"]["content"], "First!");

    let stored = app.posts.list_posts().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].author, TEST_LOGIN);
}

#[tokio::test]
async fn test_create_post_ignores_author_in_body() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hi", "content": "x", "author": "mallory" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["post"]["author"], TEST_LOGIN);
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/posts")
        .json(&serde_json::json!({ "title": "Hello", "content": "First!" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
    assert!(app.posts.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_post_invalid_body() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    let missing_content = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await;
    assert_error_response!(missing_content, StatusCode::BAD_REQUEST, "invalid request body");

    let blank_title = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "  ", "content": "body" }))
        .await;
    assert_error_response!(blank_title, StatusCode::BAD_REQUEST, "invalid request body");
}

#[tokio::test]
async fn test_data_lists_newest_first() {
    let app = create_test_app();
    let token = login_token(&app.server, TEST_LOGIN, TEST_PASSWORD).await;

    for title in ["one", "two", "three"] {
        let response = app
            .server
            .post("/api/posts")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "title": title, "content": "c" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let body: serde_json::Value = app
        .server
        .get("/api/data")
        .authorization_bearer(&token)
        .await
        .json();
    let titles: Vec<&str> = body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_html_listing_is_public_and_escaped() {
    let app = create_test_app();
    app.posts
        .create_post(
            "eve",
            &NewPost {
                title: "About XSS".to_string(),
                content: "<script>alert('xss')</script>".to_string(),
            },
        )
        .await
        .unwrap();

    let response = app.server.get("/posts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header(CONTENT_SECURITY_POLICY),
        "default-src 'self'; script-src 'none'; object-src 'none'; frame-ancestors 'none';"
    );
    let html = response.text();
    assert_not_contains!(html, "<script>");
    assert_contains!(html, "&lt;script&gt;");
    assert_contains!(html, "About XSS");
}

#[tokio::test]
async fn test_html_listing_empty() {
    let app = create_test_app();

    let response = app.server.get("/posts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "No posts");
}
