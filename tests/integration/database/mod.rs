//! PostgreSQL integration tests
//!
//! Ignored by default. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored --test-threads=1`;
//! the tests truncate shared tables.

mod stores_test;
