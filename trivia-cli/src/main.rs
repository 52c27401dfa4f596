//! trivia CLI - runs the trivia quiz API and maintains its database
//!
//! - `serve`: HTTP API over PostgreSQL or the in-memory sample data
//! - `migrate` / `seed`: create tables and load the sample question set
//! - `config`: inspect or initialize ~/.trivia/config.toml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia quiz API server",
    long_about = "Serve trivia categories, paginated questions, search and quiz rounds \
                  over HTTP, backed by PostgreSQL or an in-memory sample set."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database tables
    Migrate(commands::db::DbArgs),
    /// Create the tables and load default categories and sample questions
    Seed(commands::db::DbArgs),
    /// Manage trivia configuration (path, show, init)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // A broken config file should not stop `config path` or `config init`.
    let loaded = TriviaConfig::load();

    let tracing_config = match &loaded {
        Ok(config) => tracing_setup::TracingConfig {
            debug: cli.debug,
            level: config.log.level.clone(),
            format: config.log.format,
        },
        Err(_) => tracing_setup::TracingConfig {
            debug: cli.debug,
            ..Default::default()
        },
    };
    if let Err(err) = tracing_setup::init(&tracing_config) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    match cli.command {
        Commands::Config(args) => config::run_config(args)?,
        Commands::Serve(args) => {
            let config = loaded.context("Failed to load config")?;
            commands::run_serve(args, config).await?
        }
        Commands::Migrate(args) => {
            let config = loaded.context("Failed to load config")?;
            commands::run_migrate(args, config).await?
        }
        Commands::Seed(args) => {
            let config = loaded.context("Failed to load config")?;
            commands::run_seed(args, config).await?
        }
    }

    Ok(())
}
