//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - Connection pool with an explicit limit, passed to every repository
//! - Rely on DB constraints (foreign keys) and classify their violations
//! - Lists are ordered by id so pagination is stable

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{connect, connect_url};
pub use sqlx::PgPool;
pub use repos::{CategoryRepo, QuestionRepo};
