//! Persistence handle used by the HTTP layer
//!
//! Handlers only see `dyn TriviaStore`. `PgStore` backs production;
//! `MemoryStore` backs `serve --in-memory` and the HTTP tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory};

use crate::db::DbError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, DbError>;

    /// All questions ordered by id
    async fn questions(&self) -> Result<Vec<Question>, DbError>;

    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match on question text
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Fails with `Rejected` when the category does not exist
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    async fn insert_category(&self, label: &str) -> Result<Category, DbError>;

    /// Fails with `NotFound` when no question has this id
    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError>;

    async fn ping(&self) -> Result<(), DbError>;

    /// Questions a quiz round may draw from
    async fn quiz_pool(&self, category: QuizCategory) -> Result<Vec<Question>, DbError> {
        match category {
            QuizCategory::All => self.questions().await,
            QuizCategory::Only(id) => self.questions_in_category(id).await,
        }
    }
}
