//! trivia-server: HTTP API for the trivia quiz
//!
//! Serves categories, paginated questions, search, and quiz rounds over a
//! `TriviaStore` backed by PostgreSQL or memory.

pub mod db;
pub mod http;
pub mod seed;
pub mod store;

pub use db::DbError;
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use store::{MemoryStore, PgStore, TriviaStore};
