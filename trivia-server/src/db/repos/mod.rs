//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps rows into `trivia_core` records.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
