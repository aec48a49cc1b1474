//! msgboard-server: HTTP server for a single-resource message board
//!
//! Exposes `Message` records over a small REST API backed by PostgreSQL
//! (or an in-memory store for tests and local runs).

pub mod db;
pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Message, MessageUpdate, NewMessage};
pub use store::{InMemoryMessageStore, MessageStore, PgMessageStore, StoreError};
