//! HTTP server command for the msgboard API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use msgboard_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use msgboard_server::db::{create_pool_with_options, run_migrations};
use msgboard_server::{run_server, AppState, InMemoryMessageStore, PgMessageStore, ServerConfig};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MSGBOARD_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep messages in process memory instead of PostgreSQL (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; messages are lost on shutdown");
        AppState::new(InMemoryMessageStore::new())
    } else {
        let database_url = require_database_url(args.database_url)?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        run_migrations(&pool)
            .await
            .context("Failed to create messages table")?;

        AppState::new(PgMessageStore::new(pool))
    };

    tracing::info!("Starting msgboard server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
