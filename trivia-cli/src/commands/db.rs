//! Database maintenance commands: migrate and seed

use anyhow::{Context, Result};
use clap::Parser;

use trivia_core::TriviaConfig;
use trivia_server::db::{connect, migrations, PgPool};
use trivia_server::seed::seed;
use trivia_server::PgStore;

#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the trivia tables if they are missing
pub async fn run_migrate(args: DbArgs, config: TriviaConfig) -> Result<()> {
    let pool = open_pool(args, config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    println!("Tables ready");
    Ok(())
}

/// Create the tables, then insert the default categories and sample questions
pub async fn run_seed(args: DbArgs, config: TriviaConfig) -> Result<()> {
    let pool = open_pool(args, config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let report = seed(&PgStore::new(pool))
        .await
        .context("Failed to seed database")?;
    println!(
        "Inserted {} categories and {} questions",
        report.categories, report.questions
    );
    Ok(())
}

async fn open_pool(args: DbArgs, config: TriviaConfig) -> Result<PgPool> {
    let mut database = config.database;
    if let Some(url) = args.database_url {
        database.url = url;
    }
    connect(&database)
        .await
        .context("Failed to create database pool")
}
