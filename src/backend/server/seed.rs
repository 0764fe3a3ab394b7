/**
 * Demo Data Seeding
 *
 * Provisions the demo account and a few starter posts so a fresh database
 * is usable right away. Both steps are idempotent: the user is only inserted
 * when its login is missing, posts only when the table is empty.
 */

use sqlx::PgPool;

use crate::backend::auth::password::hash_password;

/// Demo account login
pub const DEMO_LOGIN: &str = "alice";

/// Demo account password
pub const DEMO_PASSWORD: &str = "password123";

/// Errors raised while seeding
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to hash demo password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Starter posts as (author, title, content); the last one carries markup
/// that the HTML listing must show as text.
const DEMO_POSTS: [(&str, &str, &str); 3] = [
    ("alice", "Hello", "First post on the board."),
    ("bob", "Tips", "Keep your bearer token out of URLs."),
    ("eve", "About XSS", "<script>alert('xss')</script>"),
];

/// Seed the demo user and starter posts
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), SeedError> {
    seed_demo_user(pool).await?;
    seed_demo_posts(pool).await?;
    Ok(())
}

async fn seed_demo_user(pool: &PgPool) -> Result<(), SeedError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE login = $1)")
        .bind(DEMO_LOGIN)
        .fetch_one(pool)
        .await?;

    if exists {
        tracing::debug!("Demo user {} already present", DEMO_LOGIN);
        return Ok(());
    }

    let password = DEMO_PASSWORD.to_string();
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await??;

    sqlx::query("INSERT INTO users (login, password) VALUES ($1, $2) ON CONFLICT (login) DO NOTHING")
        .bind(DEMO_LOGIN)
        .bind(hash)
        .execute(pool)
        .await?;

    tracing::info!("Seeded demo user {}", DEMO_LOGIN);
    Ok(())
}

async fn seed_demo_posts(pool: &PgPool) -> Result<(), SeedError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for (author, title, content) in DEMO_POSTS {
        sqlx::query("INSERT INTO posts (author, title, content) VALUES ($1, $2, $3)")
            .bind(author)
            .bind(title)
            .bind(content)
            .execute(pool)
            .await?;
    }

    tracing::info!("Seeded {} demo posts", DEMO_POSTS.len());
    Ok(())
}
