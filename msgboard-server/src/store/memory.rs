//! In-memory message store.
//!
//! Keeps messages in a `BTreeMap` behind a `tokio::sync::RwLock`. Ids come
//! from a counter that only grows, so a deleted id is never handed out again.
//! Nothing is persisted.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{MessageStore, Result, StoreError};
use crate::models::Message;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    messages: BTreeMap<i64, Message>,
}

/// Process-local message store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        let mut messages: Vec<Message> = inner.messages.values().cloned().collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn get(&self, id: i64) -> Result<Message> {
        let inner = self.inner.read().await;
        inner
            .messages
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, body: &str, username: &str) -> Result<Message> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let message = Message {
            id: inner.next_id,
            body: body.to_owned(),
            username: username.to_owned(),
            created_at: Utc::now(),
        };
        inner.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn update(&self, id: i64, body: Option<&str>) -> Result<Message> {
        let mut inner = self.inner.write().await;
        let message = inner
            .messages
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        if let Some(body) = body {
            message.body = body.to_owned();
        }
        Ok(message.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.messages.remove(&id).is_none() {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_list() {
        let store = InMemoryMessageStore::new();
        let created = store.create("Hello", "Liza").await.unwrap();

        let messages = store.list().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], created);
        assert_eq!(messages[0].body, "Hello");
        assert_eq!(messages[0].username, "Liza");
        assert!(messages[0].created_at <= Utc::now());
    }

    #[tokio::test]
    async fn list_is_oldest_first() {
        let store = InMemoryMessageStore::new();
        let first = store.create("one", "a").await.unwrap();
        let second = store.create("two", "b").await.unwrap();

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = InMemoryMessageStore::new();
        let first = store.create("one", "a").await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create("two", "b").await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn update_keeps_identity() {
        let store = InMemoryMessageStore::new();
        let created = store.create("Hello", "Liza").await.unwrap();

        let updated = store.update(created.id, Some("Goodbye")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, "Liza");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.body, "Goodbye");

        let untouched = store.update(created.id, None).await.unwrap();
        assert_eq!(untouched.body, "Goodbye");
    }

    #[tokio::test]
    async fn missing_id_is_not_found_and_leaves_store_alone() {
        let store = InMemoryMessageStore::new();
        let created = store.create("Hello", "Liza").await.unwrap();

        assert!(matches!(
            store.update(999, Some("x")).await,
            Err(StoreError::NotFound { id: 999 })
        ));
        assert!(matches!(
            store.delete(999).await,
            Err(StoreError::NotFound { id: 999 })
        ));
        assert_eq!(store.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryMessageStore::new();
        let created = store.create("Hello", "Liza").await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(store.list().await.unwrap().is_empty());
    }
}
