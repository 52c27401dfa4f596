//! Question repository
//!
//! - insert: relies on the `category` foreign key, violations become `Rejected`
//! - delete: zero affected rows is `NotFound`
//! - search: `ILIKE` with the term escaped so it is always a literal substring

use sqlx::{FromRow, PgPool};
use trivia_core::{like_literal, CategoryId, NewQuestion, Question, QuestionId};

use crate::db::DbError;

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Questions in one category ordered by id.
    pub async fn list_for_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Questions whose text contains `term`, ignoring case.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{}%", like_literal(term));
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Insert a question, returning it with its assigned id.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, DbError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::from_write)?;

        Ok(row.into())
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: QuestionId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}
