//! HTTP server command
//!
//! Serves the trivia API from PostgreSQL, or from the in-memory sample data
//! with `--in-memory`.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use trivia_core::TriviaConfig;
use trivia_server::db::{connect, migrations};
use trivia_server::seed::sample_store;
use trivia_server::{run_server, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config and TRIVIA_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve the bundled sample questions from memory, no database needed
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: TriviaConfig) -> Result<()> {
    let mut server_config = ServerConfig::from(&config);
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }

    tracing::info!("Starting trivia server on {}", server_config.bind_addr);

    if args.in_memory {
        tracing::info!("Using in-memory store with sample data");
        let store = sample_store().await.context("Failed to seed in-memory store")?;
        return run_server(store, server_config).await.context("Server error");
    }

    let mut database = config.database;
    if let Some(url) = args.database_url {
        database.url = url;
    }
    let pool = connect(&database)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    run_server(PgStore::new(pool), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
