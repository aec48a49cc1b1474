//! Message store - the persistence interface behind the HTTP layer
//!
//! Two backends:
//! - [`PgMessageStore`]: PostgreSQL through a shared `PgPool`
//! - [`InMemoryMessageStore`]: process-local map, for tests and `--in-memory` runs

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::models::Message;

pub use memory::InMemoryMessageStore;
pub use postgres::PgMessageStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("message '{id}' not found")]
    NotFound { id: i64 },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// CRUD over `Message` records.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// All messages, oldest first.
    async fn list(&self) -> Result<Vec<Message>>;

    /// Fetch one message by id.
    async fn get(&self, id: i64) -> Result<Message>;

    /// Insert a message; the store assigns `id` and `created_at`.
    async fn create(&self, body: &str, username: &str) -> Result<Message>;

    /// Replace the body of an existing message. `None` leaves it unchanged.
    async fn update(&self, id: i64, body: Option<&str>) -> Result<Message>;

    /// Remove a message.
    async fn delete(&self, id: i64) -> Result<()>;
}
