//! Database layer - connection pool and schema bootstrap
//!
//! - Connection pool with explicit limits, no shared single connection
//! - Schema is created idempotently at startup

pub mod migrations;
pub mod pool;

pub use migrations::run as run_migrations;
pub use pool::{create_pool, create_pool_with_options};
