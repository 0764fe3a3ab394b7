/**
 * Post Data Structures
 *
 * This module defines the post record returned by the API and the payload
 * accepted when a post is created. Posts are authored by the login taken
 * from the caller's token, never from the request body.
 */
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A stored post
///
/// # Fields
/// * `id` - Database identifier
/// * `author` - Login of the user who created the post
/// * `title` - Post title
/// * `content` - Raw post body; markup is stored as-is and escaped on render
/// * `created_at` - Creation time (UTC, no time zone stored)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Payload for `POST /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Both fields are required and must not be blank.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "must not be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "must not be empty"));
        }
        Ok(())
    }
}
