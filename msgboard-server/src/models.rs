//! Message model and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A posted message.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// POST /messages payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub body: String,
    pub username: String,
}

/// PATCH /messages/{id} payload
///
/// Only `body` is mutable. A missing `body` leaves the record as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageUpdate {
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_created_at_as_rfc3339() {
        let message = Message {
            id: 7,
            body: "Hello 👋".into(),
            username: "Liza".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["body"], "Hello 👋");
        assert_eq!(json["username"], "Liza");
        assert_eq!(json["created_at"], "2024-03-01T12:30:00Z");
    }

    #[test]
    fn new_message_requires_both_fields() {
        assert!(serde_json::from_str::<NewMessage>(r#"{"body": "hi"}"#).is_err());
        assert!(serde_json::from_str::<NewMessage>(r#"{"username": "Liza"}"#).is_err());

        let msg: NewMessage =
            serde_json::from_str(r#"{"body": "hi", "username": "Liza"}"#).unwrap();
        assert_eq!(msg.body, "hi");
        assert_eq!(msg.username, "Liza");
    }

    #[test]
    fn update_body_is_optional() {
        let update: MessageUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.body.is_none());

        let update: MessageUpdate = serde_json::from_str(r#"{"body": "Goodbye"}"#).unwrap();
        assert_eq!(update.body.as_deref(), Some("Goodbye"));
    }
}
