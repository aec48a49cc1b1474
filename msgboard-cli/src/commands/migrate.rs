//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::db::{create_pool_with_options, run_migrations};

use super::require_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the messages table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to create messages table")?;

    pool.close().await;
    Ok(())
}
