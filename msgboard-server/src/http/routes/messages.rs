//! Message endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{MessageId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Message, MessageUpdate, NewMessage};

/// GET /messages - list all messages
async fn list_messages(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.store.list().await?;
    Ok(Json(messages))
}

/// POST /messages - create a message
async fn create_message(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<NewMessage>,
) -> Result<Json<Message>, ApiError> {
    let message = state.store.create(&req.body, &req.username).await?;
    tracing::info!(id = message.id, username = %message.username, "message created");
    Ok(Json(message))
}

/// PATCH /messages/{id} - replace a message body
async fn update_message(
    State(state): State<Arc<AppState>>,
    MessageId(id): MessageId,
    ValidJson(req): ValidJson<MessageUpdate>,
) -> Result<Json<Message>, ApiError> {
    let message = state.store.update(id, req.body.as_deref()).await?;
    Ok(Json(message))
}

/// DELETE /messages/{id} - remove a message
async fn delete_message(
    State(state): State<Arc<AppState>>,
    MessageId(id): MessageId,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(id, "message deleted");
    Ok(Json(json!({})))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/{id}",
            patch(update_message).delete(delete_message),
        )
}
