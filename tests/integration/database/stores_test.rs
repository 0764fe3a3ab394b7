//! PostgreSQL store tests
//!
//! Seeding, credential lookup and post persistence against a real database.

use postgate::backend::auth::{Authenticator, CredentialStore, PgCredentialStore, TokenCodec};
use postgate::backend::posts::{PgPostStore, PostStore};
use postgate::backend::server::seed::{seed_demo_data, DEMO_LOGIN, DEMO_PASSWORD};
use postgate::shared::NewPost;
use std::sync::Arc;

use crate::common::database::{cleanup_test_data, create_test_pool, run_migrations};
use crate::common::test_config;

async fn fresh_pool() -> sqlx::PgPool {
    let pool = create_test_pool().await;
    run_migrations(&pool).await.unwrap();
    cleanup_test_data(&pool).await.unwrap();
    pool
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_seed_is_idempotent() {
    let pool = fresh_pool().await;

    seed_demo_data(&pool).await.unwrap();
    seed_demo_data(&pool).await.unwrap();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    let posts = PgPostStore::new(pool).list_posts().await.unwrap();
    assert_eq!(users, 1);
    assert_eq!(posts.len(), 3);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_seeded_user_can_log_in() {
    let pool = fresh_pool().await;
    seed_demo_data(&pool).await.unwrap();

    let store = PgCredentialStore::new(pool);
    let record = store.find_by_login(DEMO_LOGIN).await.unwrap().unwrap();
    assert!(record.password_hash.starts_with("$2"));

    let config = test_config();
    let authenticator = Authenticator::new(
        Arc::new(store),
        TokenCodec::new(&config.signing_secret),
        config.token_lifetime,
    );
    let issued = authenticator.login(DEMO_LOGIN, DEMO_PASSWORD).await.unwrap();
    assert_eq!(issued.expires_in, 21_600);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_pg_post_store_round_trip() {
    let pool = fresh_pool().await;
    let store = PgPostStore::new(pool);

    let created = store
        .create_post(
            "alice",
            &NewPost {
                title: "Stored".to_string(),
                content: "<b>kept raw</b>".to_string(),
            },
        )
        .await
        .unwrap();

    let posts = store.list_posts().await.unwrap();
    assert_eq!(posts, vec![created]);
    assert_eq!(posts[0].content, "<b>kept raw</b>");
}
