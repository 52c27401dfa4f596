//! Database connection pool

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use trivia_core::config::DatabaseSection;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect using the `[database]` config section.
pub async fn connect(settings: &DatabaseSection) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %redact(&settings.url),
        max_connections = settings.max_connections,
        "connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&settings.url)
        .await
}

/// Connect to `url` with the default pool size.
pub async fn connect_url(url: &str) -> Result<PgPool, sqlx::Error> {
    connect(&DatabaseSection {
        url: url.to_owned(),
        ..DatabaseSection::default()
    })
    .await
}

/// Drop the userinfo part of a connection URL so passwords stay out of logs.
fn redact(url: &str) -> &str {
    match url.rfind('@') {
        Some(at) => &url[at + 1..],
        None => url,
    }
}
