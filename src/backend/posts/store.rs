/**
 * Post Store
 *
 * Persistence for posts. The PostgreSQL store is used by the server; the
 * in-memory store backs tests and keeps the same ordering rules.
 */

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::backend::error::StoreError;
use crate::shared::{NewPost, Post};

/// Read and append access to posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert a post authored by `author` and return the stored row
    async fn create_post(&self, author: &str, new_post: &NewPost) -> Result<Post, StoreError>;
}

/// Post store backed by the PostgreSQL `posts` table
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author, title, content, created_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn create_post(&self, author: &str, new_post: &NewPost) -> Result<Post, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (author, title, content, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, author, title, content, created_at
            "#,
        )
        .bind(author)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }
}

/// In-memory post store
#[derive(Clone, Default)]
pub struct MemoryPostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn create_post(&self, author: &str, new_post: &NewPost) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = Post {
            id: posts.len() as i64 + 1,
            author: author.to_string(),
            title: new_post.title.clone(),
            content: new_post.content.clone(),
            created_at: Utc::now().naive_utc(),
        };
        posts.push(post.clone());
        Ok(post)
    }
}
