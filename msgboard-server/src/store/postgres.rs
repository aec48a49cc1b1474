//! PostgreSQL message store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{MessageStore, Result, StoreError};
use crate::models::Message;

/// Message store backed by the `messages` table.
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, body, username, created_at
            FROM messages
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn get(&self, id: i64) -> Result<Message> {
        sqlx::query_as::<_, Message>(
            "SELECT id, body, username, created_at FROM messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, body: &str, username: &str) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (body, username)
            VALUES ($1, $2)
            RETURNING id, body, username, created_at
            "#,
        )
        .bind(body)
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = message.id, "message created");
        Ok(message)
    }

    async fn update(&self, id: i64, body: Option<&str>) -> Result<Message> {
        let mut tx = self.pool.begin().await?;

        // COALESCE keeps the current body when no replacement is given
        let message = sqlx::query_as::<_, Message>(
            r#"
            UPDATE messages
            SET body = COALESCE($2, body)
            WHERE id = $1
            RETURNING id, body, username, created_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        tx.commit().await?;
        Ok(message)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tx.commit().await?;
        tracing::debug!(id, "message deleted");
        Ok(())
    }
}
