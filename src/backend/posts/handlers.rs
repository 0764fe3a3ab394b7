/**
 * Post Handlers
 *
 * - `GET /posts`      - public HTML listing (escaped, CSP-protected)
 * - `GET /api/data`   - JSON listing, behind the access guard
 * - `POST /api/posts` - create a post as the authenticated user
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::html::{render_posts, POSTS_CSP};
use crate::backend::posts::store::PostStore;
use crate::shared::{NewPost, Post};

/// Body of `GET /api/data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostResponse {
    pub post: Post,
}

/// Public HTML listing of every post, newest first
pub async fn show_posts(
    State(posts): State<Arc<dyn PostStore>>,
) -> Result<impl IntoResponse, BackendError> {
    let posts = posts.list_posts().await?;

    Ok((
        [(header::CONTENT_SECURITY_POLICY, POSTS_CSP)],
        Html(render_posts(&posts)),
    ))
}

/// Protected JSON listing
///
/// # Example Response
///
/// ```json
/// {"posts": [{"id": 1, "author": "alice", "title": "Hello", "content": "...", "created_at": "2024-01-01T00:00:00"}]}
/// ```
pub async fn get_data(
    AuthUser(user): AuthUser,
    State(posts): State<Arc<dyn PostStore>>,
) -> Result<Json<PostsResponse>, BackendError> {
    let posts = posts.list_posts().await?;
    tracing::debug!("Serving {} posts to {}", posts.len(), user.login);
    Ok(Json(PostsResponse { posts }))
}

/// Create a post authored by the caller
///
/// # Errors
///
/// * `400 Bad Request` - body is not `{title, content}` or a field is blank
/// * `500 Internal Server Error` - store failure
pub async fn create_post(
    AuthUser(user): AuthUser,
    State(posts): State<Arc<dyn PostStore>>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePostResponse>), BackendError> {
    let Json(new_post) = payload.map_err(|e| {
        tracing::warn!("Rejected post body from {}: {}", user.login, e.body_text());
        invalid_request_body()
    })?;

    new_post.validate().map_err(|e| {
        tracing::warn!("Rejected post from {}: {}", user.login, e);
        BackendError::Validation(e)
    })?;

    let post = posts.create_post(&user.login, &new_post).await?;
    tracing::info!("Post {} created by {}", post.id, user.login);

    Ok((StatusCode::CREATED, Json(CreatePostResponse { post })))
}

fn invalid_request_body() -> BackendError {
    BackendError::handler(StatusCode::BAD_REQUEST, "invalid request body")
}
