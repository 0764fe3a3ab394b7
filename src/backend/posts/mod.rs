//! Posts Module
//!
//! Post storage, the protected JSON endpoints and the public HTML listing.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - PostStore trait, PostgreSQL and in-memory stores
//! ├── handlers.rs  - HTTP handlers
//! └── html.rs      - Escaped HTML rendering
//! ```

/// Post persistence
pub mod store;

/// HTTP handlers
pub mod handlers;

/// HTML rendering
pub mod html;

pub use handlers::{create_post, get_data, show_posts, CreatePostResponse, PostsResponse};
pub use store::{MemoryPostStore, PgPostStore, PostStore};
